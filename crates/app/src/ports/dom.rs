//! DOM port: element lookup, class lists, attributes, and event wiring.
//!
//! Elements are opaque handles chosen by the adapter. Behaviors only compare,
//! clone, and pass them back to the port.

use std::fmt::Debug;
use std::rc::Rc;

use vitrine_domain::settings::RevealOptions;

/// Where an event listener is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenTarget<E> {
    Element(E),
    Window,
    Document,
}

/// Events the behaviors react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
    KeyDown,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Scroll => "scroll",
            Self::KeyDown => "keydown",
        }
    }
}

/// The parts of a DOM event the behaviors read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiEvent {
    /// `true` when the event originated on the element the listener is
    /// attached to, rather than on one of its descendants.
    pub on_listener_target: bool,
    /// `KeyboardEvent.key` for key events.
    pub key: Option<String>,
}

impl UiEvent {
    /// A click landing directly on the listening element.
    #[must_use]
    pub fn direct() -> Self {
        Self {
            on_listener_target: true,
            key: None,
        }
    }

    /// A key press.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            on_listener_target: true,
            key: Some(key.into()),
        }
    }
}

/// Image found inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub alt: String,
}

/// Whether an intersection watch continues after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// Keep observing the element.
    Keep,
    /// Stop observing the element.
    Release,
}

/// Event listener callback.
pub type Handler = Rc<dyn Fn(&UiEvent)>;

/// Intersection callback, receiving the target and whether it intersects.
pub type IntersectionHandler<E> = Rc<dyn Fn(&E, bool) -> Watch>;

/// Read and mutate the document.
pub trait Dom {
    /// Adapter-specific element handle.
    type Element: Clone + PartialEq + Debug + 'static;

    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// The document root (`<html>`), if the document has one.
    fn root(&self) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Replace the element's text content.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Set an inline style property.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// The first `<img>` inside `element`, if any.
    fn first_image(&self, element: &Self::Element) -> Option<ImageSource>;

    /// Attach `handler` for `kind` events on `target` for the page lifetime.
    fn listen(&self, target: ListenTarget<Self::Element>, kind: EventKind, handler: Handler);

    /// Observe viewport intersections of `targets`.
    ///
    /// The adapter stops observing a target once `handler` returns
    /// [`Watch::Release`] for it.
    fn watch_intersections(
        &self,
        targets: &[Self::Element],
        options: &RevealOptions,
        handler: IntersectionHandler<Self::Element>,
    );

    /// Run `task` once the initial document has been parsed, immediately if
    /// it already has.
    fn when_parsed(&self, task: Box<dyn FnOnce()>);
}
