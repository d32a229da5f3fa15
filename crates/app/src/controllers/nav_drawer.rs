//! Mobile navigation drawer.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_domain::settings::Settings;

use crate::ports::{EventKind, ListenTarget, Page, UiEvent};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Slide-in menu that locks page scrolling while open.
///
/// Open/closed state is read from the drawer's position marker on every
/// toggle, so markup that ships the drawer open is handled too.
pub struct NavDrawer<P: Page> {
    page: Rc<P>,
    drawer: Option<P::Element>,
    open_marker: String,
    closed_marker: String,
    lock: ScrollLock<P>,
    hold: RefCell<Option<ScrollLockGuard<P>>>,
}

impl<P: Page> NavDrawer<P> {
    /// Bind the open trigger, the close trigger, and every navigation link.
    pub fn install(page: &Rc<P>, settings: &Settings, lock: &ScrollLock<P>) -> Rc<Self> {
        let drawer = page.element_by_id(&settings.ids.mobile_menu);
        if drawer.is_none() {
            tracing::debug!(id = %settings.ids.mobile_menu, "mobile menu not present");
        }
        let controller = Rc::new(Self {
            page: Rc::clone(page),
            drawer,
            open_marker: settings.markers.drawer_open.clone(),
            closed_marker: settings.markers.drawer_closed.clone(),
            lock: lock.clone(),
            hold: RefCell::new(None),
        });

        let triggers = [&settings.ids.mobile_menu_open, &settings.ids.mobile_menu_close]
            .into_iter()
            .filter_map(|id| page.element_by_id(id))
            .chain(page.elements_by_class(&settings.classes.mobile_link));
        for trigger in triggers {
            let this = Rc::clone(&controller);
            page.listen(
                ListenTarget::Element(trigger),
                EventKind::Click,
                Rc::new(move |_: &UiEvent| this.toggle()),
            );
        }

        controller
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.drawer
            .as_ref()
            .is_some_and(|drawer| self.page.has_class(drawer, &self.open_marker))
    }

    /// Open a closed drawer, close an open one.
    pub fn toggle(&self) {
        let Some(drawer) = &self.drawer else {
            return;
        };
        if self.page.has_class(drawer, &self.open_marker) {
            self.page.remove_class(drawer, &self.open_marker);
            self.page.add_class(drawer, &self.closed_marker);
            let released = self.hold.borrow_mut().take();
            drop(released);
            tracing::trace!("mobile menu closed");
        } else {
            self.page.remove_class(drawer, &self.closed_marker);
            self.page.add_class(drawer, &self.open_marker);
            let mut hold = self.hold.borrow_mut();
            if hold.is_none() {
                *hold = Some(self.lock.acquire());
            }
            tracing::trace!("mobile menu opened");
        }
    }
}
