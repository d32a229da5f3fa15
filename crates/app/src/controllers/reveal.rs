//! Scroll-triggered reveal animations.

use std::rc::Rc;

use vitrine_domain::settings::{RevealOptions, Settings};

use crate::ports::{Page, Watch};

/// Marks tagged elements revealed the first time they enter the viewport.
///
/// Revealing is one-shot: the element is released from observation in the
/// same callback, so it never re-triggers.
pub struct RevealAnimator<P: Page> {
    page: Rc<P>,
    tag: String,
    revealed_marker: String,
    options: RevealOptions,
}

impl<P: Page> RevealAnimator<P> {
    /// Start observing tagged elements once the document is parsed.
    pub fn install(page: &Rc<P>, settings: &Settings) -> Rc<Self> {
        let animator = Rc::new(Self {
            page: Rc::clone(page),
            tag: settings.classes.reveal.clone(),
            revealed_marker: settings.markers.revealed.clone(),
            options: settings.reveal.clone(),
        });
        let this = Rc::clone(&animator);
        page.when_parsed(Box::new(move || this.observe_tagged()));
        animator
    }

    /// Query tagged elements and hand them to the intersection watcher.
    pub fn observe_tagged(self: &Rc<Self>) {
        let targets = self.page.elements_by_class(&self.tag);
        if targets.is_empty() {
            tracing::debug!(class = %self.tag, "no reveal targets");
            return;
        }
        tracing::debug!(count = targets.len(), "observing reveal targets");
        let this = Rc::clone(self);
        self.page.watch_intersections(
            &targets,
            &self.options,
            Rc::new(move |element: &P::Element, is_intersecting: bool| {
                this.on_intersection(element, is_intersecting)
            }),
        );
    }

    pub fn on_intersection(&self, element: &P::Element, is_intersecting: bool) -> Watch {
        if is_intersecting {
            self.page.add_class(element, &self.revealed_marker);
            Watch::Release
        } else {
            Watch::Keep
        }
    }
}
