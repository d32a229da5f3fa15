//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the behaviors and the page they run in.
//! The browser adapter implements them with `web-sys`; the virtual adapter
//! implements them in memory for tests.

pub mod dom;
pub mod scheduler;
pub mod storage;
pub mod viewport;

pub use dom::{Dom, EventKind, Handler, ImageSource, IntersectionHandler, ListenTarget, UiEvent, Watch};
pub use scheduler::{Scheduler, Task};
pub use storage::PreferenceStore;
pub use viewport::Viewport;

/// Everything a behavior may need from the page environment.
///
/// Blanket-implemented for any type implementing all four ports.
pub trait Page: Dom + Viewport + PreferenceStore + Scheduler + 'static {}

impl<T> Page for T where T: Dom + Viewport + PreferenceStore + Scheduler + 'static {}
