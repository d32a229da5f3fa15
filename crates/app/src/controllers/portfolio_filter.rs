//! Category filter for the portfolio grid.
//!
//! A selection fades every item out, decides visibility once the fade-out
//! has run, and fades included items back in:
//!
//! ```text
//! click ── fade_out ──▶ settle ── fade_in ──▶ shown
//!                          └───────────────▶ hidden
//! ```
//!
//! Both delays mirror the stylesheet transition durations. Each item has its
//! own cancellable transition, so a newer selection supersedes pending
//! follow-ups of an older one.

use std::rc::Rc;

use vitrine_domain::filter::{Category, FilterSelection};
use vitrine_domain::settings::{Markers, Settings, Timings};

use crate::ports::{EventKind, ListenTarget, Page, UiEvent};
use crate::transitions::{CancelToken, Transitions};

struct FilterControl<E> {
    element: E,
    selection: FilterSelection,
}

struct PortfolioItem<E> {
    element: E,
    category: Category,
}

/// Visibility filter over `.portfolio-item` elements.
pub struct PortfolioFilter<P: Page> {
    page: Rc<P>,
    controls: Vec<FilterControl<P::Element>>,
    items: Vec<PortfolioItem<P::Element>>,
    markers: Markers,
    timings: Timings,
    transitions: Transitions<usize>,
}

impl<P: Page> PortfolioFilter<P> {
    /// Resolve controls and items from markup and bind each control.
    ///
    /// Returns `None` when the page has no filter controls.
    pub fn install(page: &Rc<P>, settings: &Settings) -> Option<Rc<Self>> {
        let attributes = &settings.attributes;
        let controls: Vec<_> = page
            .elements_by_class(&settings.classes.filter_control)
            .into_iter()
            .map(|element| FilterControl {
                selection: FilterSelection::from_attribute(
                    page.attribute(&element, &attributes.filter).as_deref(),
                ),
                element,
            })
            .collect();
        if controls.is_empty() {
            tracing::debug!(class = %settings.classes.filter_control, "no filter controls");
            return None;
        }
        let items = page
            .elements_by_class(&settings.classes.portfolio_item)
            .into_iter()
            .map(|element| PortfolioItem {
                category: Category::from_attribute(
                    page.attribute(&element, &attributes.category).as_deref(),
                ),
                element,
            })
            .collect();

        let filter = Rc::new(Self {
            page: Rc::clone(page),
            controls,
            items,
            markers: settings.markers.clone(),
            timings: settings.timings.clone(),
            transitions: Transitions::new(),
        });
        for (index, control) in filter.controls.iter().enumerate() {
            let this = Rc::clone(&filter);
            page.listen(
                ListenTarget::Element(control.element.clone()),
                EventKind::Click,
                Rc::new(move |_: &UiEvent| this.select(index)),
            );
        }
        tracing::debug!(
            controls = filter.controls.len(),
            items = filter.items.len(),
            "portfolio filter installed"
        );

        Some(filter)
    }

    /// Selection carried by the control at `index`.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<&FilterSelection> {
        self.controls.get(index).map(|control| &control.selection)
    }

    /// Activate the control at `index` and start re-rendering the grid.
    #[tracing::instrument(skip(self))]
    pub fn select(self: &Rc<Self>, index: usize) {
        let Some(control) = self.controls.get(index) else {
            return;
        };
        self.mark_active(&control.element);

        for (position, item) in self.items.iter().enumerate() {
            self.page.set_style(&item.element, "opacity", "0");
            self.page.set_style(&item.element, "transform", "scale(0.9)");

            let included = control.selection.includes(&item.category);
            let token = self.transitions.begin(position);
            let follow_up = token.clone();
            let this = Rc::clone(self);
            token.schedule(&*self.page, self.timings.filter_fade_out(), move || {
                this.settle(position, included, &follow_up);
            });
        }
    }

    fn mark_active(&self, selected: &P::Element) {
        let markers = &self.markers;
        for control in &self.controls {
            self.page.remove_class(&control.element, &markers.filter_active);
            for highlight in &markers.filter_highlight {
                self.page.remove_class(&control.element, highlight);
            }
            for idle in &markers.filter_idle {
                self.page.add_class(&control.element, idle);
            }
        }
        self.page.add_class(selected, &markers.filter_active);
    }

    fn settle(self: &Rc<Self>, position: usize, included: bool, token: &CancelToken) {
        let Some(item) = self.items.get(position) else {
            return;
        };
        if included {
            self.page.remove_class(&item.element, &self.markers.item_hidden);
            let this = Rc::clone(self);
            token.schedule(&*self.page, self.timings.filter_fade_in(), move || {
                this.fade_in(position);
            });
        } else {
            self.page.add_class(&item.element, &self.markers.item_hidden);
        }
    }

    fn fade_in(&self, position: usize) {
        if let Some(item) = self.items.get(position) {
            self.page.set_style(&item.element, "opacity", "1");
            self.page.set_style(&item.element, "transform", "scale(1)");
        }
    }
}
