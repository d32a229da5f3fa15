//! Modal image lightbox over the portfolio grid.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vitrine_domain::settings::{Markers, Settings, Timings};

use crate::ports::{EventKind, ImageSource, ListenTarget, Page, UiEvent};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::transitions::Transitions;

const ESCAPE_KEY: &str = "Escape";

/// Whether the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// Overlay showing an enlarged portfolio image with its caption.
///
/// Opening and closing each end with a delayed follow-up (fade-in start,
/// re-hide). A transition always cancels the other's pending follow-up, and
/// the scroll lock is held at most once while the overlay is open.
pub struct Lightbox<P: Page> {
    page: Rc<P>,
    overlay: P::Element,
    image: Option<P::Element>,
    caption: Option<P::Element>,
    description_attribute: String,
    markers: Markers,
    timings: Timings,
    state: Cell<LightboxState>,
    transition: Transitions<()>,
    lock: ScrollLock<P>,
    hold: RefCell<Option<ScrollLockGuard<P>>>,
}

impl<P: Page> Lightbox<P> {
    /// Bind portfolio item clicks, the close control, backdrop clicks, and
    /// the Escape key.
    ///
    /// Returns `None` when the page has no lightbox overlay.
    pub fn install(page: &Rc<P>, settings: &Settings, lock: &ScrollLock<P>) -> Option<Rc<Self>> {
        let ids = &settings.ids;
        let Some(overlay) = page.element_by_id(&ids.lightbox) else {
            tracing::debug!(id = %ids.lightbox, "lightbox not present");
            return None;
        };
        let lightbox = Rc::new(Self {
            page: Rc::clone(page),
            overlay: overlay.clone(),
            image: page.element_by_id(&ids.lightbox_image),
            caption: page.element_by_id(&ids.lightbox_caption),
            description_attribute: settings.attributes.description.clone(),
            markers: settings.markers.clone(),
            timings: settings.timings.clone(),
            state: Cell::new(LightboxState::Closed),
            transition: Transitions::new(),
            lock: lock.clone(),
            hold: RefCell::new(None),
        });

        for item in page.elements_by_class(&settings.classes.portfolio_item) {
            let this = Rc::clone(&lightbox);
            let target = item.clone();
            page.listen(
                ListenTarget::Element(item),
                EventKind::Click,
                Rc::new(move |_: &UiEvent| {
                    this.open_item(&target);
                }),
            );
        }
        if let Some(close) = page.element_by_id(&ids.lightbox_close) {
            let this = Rc::clone(&lightbox);
            page.listen(
                ListenTarget::Element(close),
                EventKind::Click,
                Rc::new(move |_: &UiEvent| this.close()),
            );
        }
        let this = Rc::clone(&lightbox);
        page.listen(
            ListenTarget::Element(overlay),
            EventKind::Click,
            Rc::new(move |event: &UiEvent| {
                if event.on_listener_target {
                    this.close();
                }
            }),
        );
        let this = Rc::clone(&lightbox);
        page.listen(
            ListenTarget::Document,
            EventKind::KeyDown,
            Rc::new(move |event: &UiEvent| {
                if event.key.as_deref() == Some(ESCAPE_KEY) {
                    this.close();
                }
            }),
        );

        Some(lightbox)
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state.get()
    }

    /// Open with the image and description of a portfolio item.
    ///
    /// Returns `false`, leaving the overlay untouched, when the item has no
    /// image or no (non-empty) description.
    pub fn open_item(self: &Rc<Self>, item: &P::Element) -> bool {
        let Some(image) = self.page.first_image(item) else {
            tracing::trace!("portfolio item has no image");
            return false;
        };
        let Some(description) = self
            .page
            .attribute(item, &self.description_attribute)
            .filter(|description| !description.is_empty())
        else {
            tracing::trace!("portfolio item has no description");
            return false;
        };
        self.open(&image, &description);
        true
    }

    /// Populate the slots, unhide the overlay, and schedule its fade-in.
    pub fn open(self: &Rc<Self>, image: &ImageSource, description: &str) {
        if let Some(slot) = &self.image {
            self.page.set_attribute(slot, "src", &image.src);
            self.page.set_attribute(slot, "alt", &image.alt);
        }
        if let Some(caption) = &self.caption {
            self.page.set_text(caption, description);
        }
        self.page.remove_class(&self.overlay, &self.markers.lightbox_hidden);
        self.state.set(LightboxState::Open);
        tracing::trace!(src = %image.src, "lightbox opening");

        let this = Rc::clone(self);
        self.transition
            .begin(())
            .schedule(&*self.page, self.timings.lightbox_open(), move || {
                this.finish_open();
            });
    }

    /// Start the fade-out and schedule the re-hide. No-op when closed.
    pub fn close(self: &Rc<Self>) {
        if self.state.get() == LightboxState::Closed {
            return;
        }
        self.page.add_class(&self.overlay, &self.markers.lightbox_transparent);
        self.state.set(LightboxState::Closed);
        tracing::trace!("lightbox closing");

        let this = Rc::clone(self);
        self.transition
            .begin(())
            .schedule(&*self.page, self.timings.lightbox_close(), move || {
                this.finish_close();
            });
    }

    fn finish_open(&self) {
        self.page.remove_class(&self.overlay, &self.markers.lightbox_transparent);
        let mut hold = self.hold.borrow_mut();
        if hold.is_none() {
            *hold = Some(self.lock.acquire());
        }
    }

    fn finish_close(&self) {
        self.page.add_class(&self.overlay, &self.markers.lightbox_hidden);
        if let Some(slot) = &self.image {
            self.page.set_attribute(slot, "src", "");
        }
        let released = self.hold.borrow_mut().take();
        drop(released);
    }
}
