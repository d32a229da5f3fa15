//! # vitrine-app
//!
//! Application layer: page behaviors and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Dom`: element lookup, class lists, attributes, listeners, intersection
//!   - `Viewport`: scroll offset, smooth scroll, OS color scheme, scroll lock flag
//!   - `PreferenceStore`: persisted key/value preferences
//!   - `Scheduler`: delayed one-shot tasks
//! - Define the **behaviors** wired onto a page:
//!   - `NavDrawer`, `ThemeController`, `BackToTop`, `RevealAnimator`,
//!     `PortfolioFilter`, `Lightbox`
//! - Provide in-process infrastructure that doesn't need IO: the counted
//!   `ScrollLock` and cancellable `Transitions`
//!
//! ## Dependency rule
//! Depends on `vitrine-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod behaviors;
pub mod controllers;
pub mod ports;
pub mod scroll_lock;
pub mod transitions;

pub use behaviors::Behaviors;
