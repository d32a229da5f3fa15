//! Floating "back to top" button.

use std::rc::Rc;

use vitrine_domain::settings::Settings;

use crate::ports::{EventKind, ListenTarget, Page, UiEvent};

/// Shows the button past a scroll threshold and scrolls home on click.
pub struct BackToTop<P: Page> {
    page: Rc<P>,
    button: P::Element,
    hidden_markers: Vec<String>,
    threshold: f64,
}

impl<P: Page> BackToTop<P> {
    /// Bind the window scroll listener and the button click.
    ///
    /// Returns `None` without attaching anything when the button is absent.
    pub fn install(page: &Rc<P>, settings: &Settings) -> Option<Rc<Self>> {
        let Some(button) = page.element_by_id(&settings.ids.back_to_top) else {
            tracing::debug!(id = %settings.ids.back_to_top, "back-to-top button not present");
            return None;
        };
        let controller = Rc::new(Self {
            page: Rc::clone(page),
            button: button.clone(),
            hidden_markers: settings.markers.back_to_top_hidden.clone(),
            threshold: settings.back_to_top_threshold,
        });

        let this = Rc::clone(&controller);
        page.listen(
            ListenTarget::Window,
            EventKind::Scroll,
            Rc::new(move |_: &UiEvent| this.on_scroll()),
        );
        let this = Rc::clone(&controller);
        page.listen(
            ListenTarget::Element(button),
            EventKind::Click,
            Rc::new(move |_: &UiEvent| this.page.scroll_to_top()),
        );

        Some(controller)
    }

    /// Re-evaluate visibility against the live scroll offset.
    pub fn on_scroll(&self) {
        self.update(self.page.scroll_offset());
    }

    /// Show the button strictly above the threshold, hide it otherwise.
    pub fn update(&self, offset: f64) {
        let visible = offset > self.threshold;
        for marker in &self.hidden_markers {
            if visible {
                self.page.remove_class(&self.button, marker);
            } else {
                self.page.add_class(&self.button, marker);
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self
            .hidden_markers
            .iter()
            .any(|marker| self.page.has_class(&self.button, marker))
    }
}
