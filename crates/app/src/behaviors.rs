//! Installation of every page behavior onto one page.

use std::rc::Rc;

use vitrine_domain::settings::Settings;

use crate::controllers::{
    BackToTop, Lightbox, NavDrawer, PortfolioFilter, RevealAnimator, ThemeController,
};
use crate::ports::Page;
use crate::scroll_lock::ScrollLock;

/// Handles to the installed behaviors.
///
/// The listeners keep the controllers alive for the page lifetime; dropping
/// this struct does not uninstall anything.
pub struct Behaviors<P: Page> {
    pub scroll_lock: ScrollLock<P>,
    pub theme: Rc<ThemeController<P>>,
    pub drawer: Rc<NavDrawer<P>>,
    pub back_to_top: Option<Rc<BackToTop<P>>>,
    pub reveal: Rc<RevealAnimator<P>>,
    pub filter: Option<Rc<PortfolioFilter<P>>>,
    pub lightbox: Option<Rc<Lightbox<P>>>,
}

impl<P: Page> Behaviors<P> {
    /// Wire every behavior onto `page`.
    ///
    /// The theme is resolved and applied first, synchronously, so the page
    /// never renders in the wrong scheme once this returns.
    pub fn install(page: &Rc<P>, settings: &Settings) -> Self {
        let scroll_lock = ScrollLock::new(Rc::clone(page));

        let theme = ThemeController::install(page, settings);
        let drawer = NavDrawer::install(page, settings, &scroll_lock);
        let back_to_top = BackToTop::install(page, settings);
        let reveal = RevealAnimator::install(page, settings);
        let filter = PortfolioFilter::install(page, settings);
        let lightbox = Lightbox::install(page, settings, &scroll_lock);

        tracing::debug!(
            theme = %theme.current(),
            back_to_top = back_to_top.is_some(),
            filter = filter.is_some(),
            lightbox = lightbox.is_some(),
            "page behaviors installed"
        );

        Self {
            scroll_lock,
            theme,
            drawer,
            back_to_top,
            reveal,
            filter,
            lightbox,
        }
    }
}
