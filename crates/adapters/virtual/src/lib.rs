//! # vitrine-adapter-virtual
//!
//! Virtual page adapter: an in-memory document, viewport, storage, and manual
//! clock implementing every `vitrine-app` port. Driving helpers dispatch the
//! events a browser would (clicks, key presses, scrolling, intersections,
//! elapsed time) so behaviors can be exercised without a rendering engine.
//!
//! | Port | Virtual behaviour |
//! |------|-------------------|
//! | `Dom` | Flat list of [`NodeId`] elements with classes, attributes, styles, text |
//! | `Viewport` | Scroll offset set by [`VirtualPage::scroll_to`]; records the scroll lock flag |
//! | `PreferenceStore` | `HashMap`, with switchable failure injection |
//! | `Scheduler` | Manual clock advanced by [`VirtualPage::advance`] |
//!
//! ## Dependency rule
//!
//! Depends on `vitrine-app` (port traits) and `vitrine-domain` only.

mod clock;
mod node;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use vitrine_app::ports::{
    Dom, EventKind, Handler, ImageSource, IntersectionHandler, ListenTarget, PreferenceStore,
    Scheduler, Task, UiEvent, Viewport, Watch,
};
use vitrine_domain::error::VitrineError;
use vitrine_domain::settings::RevealOptions;

use clock::VirtualClock;
use node::Node;
pub use node::{NodeId, NodeSpec};

/// Storage failure injected with [`VirtualPage::fail_storage`].
#[derive(Debug, thiserror::Error)]
#[error("virtual storage unavailable")]
pub struct StorageUnavailable;

struct Listener {
    target: ListenTarget<NodeId>,
    kind: EventKind,
    handler: Handler,
}

struct Observation {
    target: NodeId,
    handler: IntersectionHandler<NodeId>,
}

/// In-memory page implementing [`vitrine_app::ports::Page`].
pub struct VirtualPage {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Listener>>,
    observations: RefCell<Vec<Observation>>,
    last_reveal_options: RefCell<Option<RevealOptions>>,
    parsed: Cell<bool>,
    on_parsed: RefCell<Vec<Task>>,
    clock: VirtualClock,
    storage: RefCell<HashMap<String, String>>,
    storage_writes: Cell<usize>,
    storage_fails: Cell<bool>,
    scroll_offset: Cell<f64>,
    scroll_locked: Cell<bool>,
    scroll_to_top_calls: Cell<usize>,
    prefers_dark: Cell<bool>,
    class_additions: RefCell<HashMap<(NodeId, String), usize>>,
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self {
            nodes: RefCell::new(vec![Node::default()]),
            listeners: RefCell::new(Vec::new()),
            observations: RefCell::new(Vec::new()),
            last_reveal_options: RefCell::new(None),
            parsed: Cell::new(true),
            on_parsed: RefCell::new(Vec::new()),
            clock: VirtualClock::default(),
            storage: RefCell::new(HashMap::new()),
            storage_writes: Cell::new(0),
            storage_fails: Cell::new(false),
            scroll_offset: Cell::new(0.0),
            scroll_locked: Cell::new(false),
            scroll_to_top_calls: Cell::new(0),
            prefers_dark: Cell::new(false),
            class_additions: RefCell::new(HashMap::new()),
        }
    }
}

impl VirtualPage {
    /// A fully parsed, empty page with only the root element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose document is still being parsed; tasks passed to
    /// `when_parsed` wait for [`finish_parsing`](Self::finish_parsing).
    #[must_use]
    pub fn parsing() -> Self {
        let page = Self::default();
        page.parsed.set(false);
        page
    }

    /// Append an element to the document.
    pub fn add(&self, spec: NodeSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node::from(spec));
        NodeId(nodes.len() - 1)
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Mark the document parsed and run the deferred tasks.
    pub fn finish_parsing(&self) {
        self.parsed.set(true);
        let tasks = std::mem::take(&mut *self.on_parsed.borrow_mut());
        for task in tasks {
            task();
        }
    }

    // --- Driving helpers -------------------------------------------------

    /// Click directly on `node`.
    pub fn click(&self, node: NodeId) {
        self.dispatch(&ListenTarget::Element(node), EventKind::Click, &UiEvent::direct());
    }

    /// Click on a descendant of `node`; the event bubbles to `node`'s
    /// listeners but does not originate on it.
    pub fn click_inside(&self, node: NodeId) {
        let event = UiEvent {
            on_listener_target: false,
            key: None,
        };
        self.dispatch(&ListenTarget::Element(node), EventKind::Click, &event);
    }

    /// Press a key with the document focused.
    pub fn press_key(&self, key: &str) {
        self.dispatch(&ListenTarget::Document, EventKind::KeyDown, &UiEvent::key(key));
    }

    /// Jump to a scroll offset and fire a window scroll event.
    pub fn scroll_to(&self, offset: f64) {
        self.scroll_offset.set(offset);
        self.dispatch(&ListenTarget::Window, EventKind::Scroll, &UiEvent::default());
    }

    /// Report an intersection change for `node`.
    ///
    /// Does nothing when `node` is not observed.
    pub fn intersect(&self, node: NodeId, is_intersecting: bool) {
        let handler = self
            .observations
            .borrow()
            .iter()
            .find(|observation| observation.target == node)
            .map(|observation| observation.handler.clone());
        let Some(handler) = handler else {
            return;
        };
        if handler(&node, is_intersecting) == Watch::Release {
            self.observations
                .borrow_mut()
                .retain(|observation| observation.target != node);
        }
    }

    /// Advance the virtual clock, running tasks that come due.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Advance the virtual clock by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    // --- Environment knobs -----------------------------------------------

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }

    /// Make every storage operation fail (or succeed again).
    pub fn fail_storage(&self, fails: bool) {
        self.storage_fails.set(fails);
    }

    /// Seed storage without going through the port.
    pub fn seed_storage(&self, key: &str, value: &str) {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    // --- Inspection ------------------------------------------------------

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.with_node(node, |n| n.classes.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn node_has_class(&self, node: NodeId, class: &str) -> bool {
        self.with_node(node, |n| n.has_class(class)).unwrap_or(false)
    }

    #[must_use]
    pub fn node_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.with_node(node, |n| n.attributes.get(name).cloned()).flatten()
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.with_node(node, |n| n.styles.get(property).cloned()).flatten()
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.with_node(node, |n| n.text.clone()).unwrap_or_default()
    }

    /// How many times `class` was added to `node` while absent.
    #[must_use]
    pub fn class_additions(&self, node: NodeId, class: &str) -> usize {
        self.class_additions
            .borrow()
            .get(&(node, class.to_string()))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    /// Number of successful storage writes.
    #[must_use]
    pub fn storage_writes(&self) -> usize {
        self.storage_writes.get()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }

    #[must_use]
    pub fn scroll_to_top_calls(&self) -> usize {
        self.scroll_to_top_calls.get()
    }

    #[must_use]
    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observations
            .borrow()
            .iter()
            .any(|observation| observation.target == node)
    }

    /// Options passed to the most recent intersection watch.
    #[must_use]
    pub fn reveal_options(&self) -> Option<RevealOptions> {
        self.last_reveal_options.borrow().clone()
    }

    /// Number of listeners attached for `kind` on `target`.
    #[must_use]
    pub fn listener_count(&self, target: &ListenTarget<NodeId>, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| &listener.target == target && listener.kind == kind)
            .count()
    }

    /// Scheduled tasks that have not run yet, cancelled ones included.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.clock.pending()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.nodes.borrow().get(node.0).map(f)
    }

    fn with_node_mut(&self, node: NodeId, f: impl FnOnce(&mut Node)) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node.0) {
            f(n);
        }
    }

    fn dispatch(&self, target: &ListenTarget<NodeId>, kind: EventKind, event: &UiEvent) {
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| &listener.target == target && listener.kind == kind)
            .map(|listener| listener.handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl Dom for VirtualPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.has_class(class))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn root(&self) -> Option<NodeId> {
        Some(self.root_id())
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.node_has_class(*element, class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        if !self.node_has_class(*element, class) {
            *self
                .class_additions
                .borrow_mut()
                .entry((*element, class.to_string()))
                .or_default() += 1;
        }
        self.with_node_mut(*element, |n| n.add_class(class));
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.with_node_mut(*element, |n| n.remove_class(class));
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.node_attribute(*element, name)
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.with_node_mut(*element, |n| {
            n.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.with_node_mut(*element, |n| n.text = text.to_string());
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.with_node_mut(*element, |n| {
            n.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn first_image(&self, element: &NodeId) -> Option<ImageSource> {
        self.with_node(*element, |n| n.image.clone()).flatten()
    }

    fn listen(&self, target: ListenTarget<NodeId>, kind: EventKind, handler: Handler) {
        self.listeners.borrow_mut().push(Listener {
            target,
            kind,
            handler,
        });
    }

    fn watch_intersections(
        &self,
        targets: &[NodeId],
        options: &RevealOptions,
        handler: IntersectionHandler<NodeId>,
    ) {
        *self.last_reveal_options.borrow_mut() = Some(options.clone());
        let mut observations = self.observations.borrow_mut();
        for target in targets {
            observations.push(Observation {
                target: *target,
                handler: handler.clone(),
            });
        }
    }

    fn when_parsed(&self, task: Task) {
        if self.parsed.get() {
            task();
        } else {
            self.on_parsed.borrow_mut().push(task);
        }
    }
}

impl Viewport for VirtualPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    /// Jumps straight to the end state of the smooth scroll and fires the
    /// resulting scroll event.
    fn scroll_to_top(&self) {
        self.scroll_to_top_calls.set(self.scroll_to_top_calls.get() + 1);
        self.scroll_to(0.0);
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark.get()
    }

    fn set_scroll_locked(&self, locked: bool) {
        tracing::trace!(locked, "virtual scroll lock");
        self.scroll_locked.set(locked);
    }
}

impl PreferenceStore for VirtualPage {
    fn load(&self, key: &str) -> Result<Option<String>, VitrineError> {
        if self.storage_fails.get() {
            return Err(VitrineError::Storage(Box::new(StorageUnavailable)));
        }
        Ok(self.stored(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), VitrineError> {
        if self.storage_fails.get() {
            return Err(VitrineError::Storage(Box::new(StorageUnavailable)));
        }
        self.seed_storage(key, value);
        self.storage_writes.set(self.storage_writes.get() + 1);
        Ok(())
    }
}

impl Scheduler for VirtualPage {
    fn schedule(&self, delay: Duration, task: Task) {
        self.clock.schedule(delay, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn should_start_with_root_only() {
        let page = VirtualPage::new();
        assert_eq!(page.root(), Some(page.root_id()));
        assert!(page.elements_by_class("anything").is_empty());
    }

    #[test]
    fn should_find_elements_by_id_and_class_in_document_order() {
        let page = VirtualPage::new();
        let first = page.add(NodeSpec::new().class("card"));
        let menu = page.add(NodeSpec::with_id("menu"));
        let second = page.add(NodeSpec::new().class("card"));

        assert_eq!(page.element_by_id("menu"), Some(menu));
        assert_eq!(page.element_by_id("missing"), None);
        assert_eq!(page.elements_by_class("card"), [first, second]);
    }

    #[test]
    fn should_dispatch_click_only_to_target_listeners() {
        let page = VirtualPage::new();
        let a = page.add(NodeSpec::new());
        let b = page.add(NodeSpec::new());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        page.listen(
            ListenTarget::Element(a),
            EventKind::Click,
            Rc::new(move |_: &UiEvent| counter.set(counter.get() + 1)),
        );

        page.click(b);
        assert_eq!(hits.get(), 0);
        page.click(a);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn should_flag_bubbled_clicks() {
        let page = VirtualPage::new();
        let overlay = page.add(NodeSpec::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        page.listen(
            ListenTarget::Element(overlay),
            EventKind::Click,
            Rc::new(move |event: &UiEvent| log.borrow_mut().push(event.on_listener_target)),
        );

        page.click(overlay);
        page.click_inside(overlay);

        assert_eq!(*seen.borrow(), [true, false]);
    }

    #[test]
    fn should_stop_observing_released_targets() {
        let page = VirtualPage::new();
        let node = page.add(NodeSpec::new());
        page.watch_intersections(
            &[node],
            &RevealOptions::default(),
            Rc::new(|_: &NodeId, intersecting: bool| {
                if intersecting { Watch::Release } else { Watch::Keep }
            }),
        );

        page.intersect(node, false);
        assert!(page.is_observed(node));
        page.intersect(node, true);
        assert!(!page.is_observed(node));
    }

    #[test]
    fn should_defer_parsed_tasks_until_parsing_finishes() {
        let page = VirtualPage::parsing();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        page.when_parsed(Box::new(move || flag.set(true)));
        assert!(!ran.get());

        page.finish_parsing();
        assert!(ran.get());
    }

    #[test]
    fn should_fail_storage_when_injected() {
        let page = VirtualPage::new();
        page.fail_storage(true);
        assert!(matches!(
            page.store("theme", "dark"),
            Err(VitrineError::Storage(_))
        ));
        assert!(page.load("theme").is_err());
        assert_eq!(page.storage_writes(), 0);
    }

    #[test]
    fn should_scroll_home_and_notify_listeners() {
        let page = VirtualPage::new();
        page.scroll_to(900.0);
        let events = Rc::new(Cell::new(0));
        let counter = Rc::clone(&events);
        page.listen(
            ListenTarget::Window,
            EventKind::Scroll,
            Rc::new(move |_: &UiEvent| counter.set(counter.get() + 1)),
        );

        page.scroll_to_top();

        assert!(page.scroll_offset().abs() < f64::EPSILON);
        assert_eq!(page.scroll_to_top_calls(), 1);
        assert_eq!(events.get(), 1);
    }

    #[test]
    fn should_count_class_additions_only_when_absent() {
        let page = VirtualPage::new();
        let node = page.add(NodeSpec::new());
        page.add_class(&node, "active");
        page.add_class(&node, "active");
        assert_eq!(page.class_additions(node, "active"), 1);

        page.remove_class(&node, "active");
        page.add_class(&node, "active");
        assert_eq!(page.class_additions(node, "active"), 2);
    }
}
