//! Page behaviors: one controller per feature.
//!
//! Each controller accepts the page environment via a generic [`Page`]
//! parameter (constructor injection) and attaches its own listeners in
//! `install`. Features whose elements are missing install as no-ops.
//!
//! [`Page`]: crate::ports::Page

pub mod back_to_top;
pub mod lightbox;
pub mod nav_drawer;
pub mod portfolio_filter;
pub mod reveal;
pub mod theme;

pub use back_to_top::BackToTop;
pub use lightbox::{Lightbox, LightboxState};
pub use nav_drawer::NavDrawer;
pub use portfolio_filter::PortfolioFilter;
pub use reveal::RevealAnimator;
pub use theme::ThemeController;
