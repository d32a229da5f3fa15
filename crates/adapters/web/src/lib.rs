//! # vitrine-adapter-web
//!
//! Browser adapter implementing every `vitrine-app` port with `web-sys`.
//!
//! | Port | Browser API |
//! |------|-------------|
//! | `Dom` | `Document`, `Element.classList`, `gloo-events` listeners, `IntersectionObserver` |
//! | `Viewport` | `window.scrollY`, `window.scrollTo({behavior: "smooth"})`, `matchMedia`, `body.style.overflow` |
//! | `PreferenceStore` | `window.localStorage` |
//! | `Scheduler` | `gloo-timers` timeouts |
//!
//! Listeners, observers, and timers live for the page lifetime and are
//! intentionally leaked (`forget`) once attached.
//!
//! ## Dependency rule
//!
//! Depends on `vitrine-app` (port traits) and `vitrine-domain` only.

pub mod error;

use std::time::Duration;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use vitrine_app::ports::{
    Dom, EventKind, Handler, ImageSource, IntersectionHandler, ListenTarget, PreferenceStore,
    Scheduler, Task, UiEvent, Viewport, Watch,
};
use vitrine_domain::error::VitrineError;
use vitrine_domain::settings::RevealOptions;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};

pub use error::WebError;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The current browsing context as a [`vitrine_app::ports::Page`].
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// Bind to the global `window` and its document.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::NoWindow`] outside a browsing context and
    /// [`WebError::NoDocument`] when the window has no document.
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Text content of the element with `id`, used for embedded JSON blocks.
    #[must_use]
    pub fn embedded_text(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }

    fn storage(&self) -> Result<Storage, WebError> {
        self.window
            .local_storage()?
            .ok_or(WebError::StorageUnavailable)
    }

    fn event_target(&self, target: ListenTarget<Element>) -> EventTarget {
        match target {
            ListenTarget::Element(element) => element.into(),
            ListenTarget::Window => self.window.clone().into(),
            ListenTarget::Document => self.document.clone().into(),
        }
    }

    fn is_loading(&self) -> bool {
        js_sys::Reflect::get(&self.document, &JsValue::from_str("readyState"))
            .ok()
            .and_then(|state| state.as_string())
            .is_some_and(|state| state == "loading")
    }
}

fn ui_event(event: &Event) -> UiEvent {
    UiEvent {
        on_listener_target: event.target() == event.current_target(),
        key: event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key),
    }
}

fn log_js_error(result: Result<(), JsValue>, action: &'static str) {
    if let Err(err) = result {
        tracing::warn!(error = ?err, action, "browser API call failed");
    }
}

impl Dom for BrowserPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        log_js_error(element.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, element: &Element, class: &str) {
        log_js_error(element.class_list().remove_1(class), "classList.remove");
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        log_js_error(element.set_attribute(name, value), "setAttribute");
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            log_js_error(element.style().set_property(property, value), "style.setProperty");
        }
    }

    fn first_image(&self, element: &Element) -> Option<ImageSource> {
        let image = element
            .query_selector("img")
            .ok()
            .flatten()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        Some(ImageSource {
            src: image.src(),
            alt: image.alt(),
        })
    }

    fn listen(&self, target: ListenTarget<Element>, kind: EventKind, handler: Handler) {
        let target = self.event_target(target);
        EventListener::new(&target, kind.as_str(), move |event| handler(&ui_event(event))).forget();
    }

    fn watch_intersections(
        &self,
        targets: &[Element],
        options: &RevealOptions,
        handler: IntersectionHandler<Element>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    let target = entry.target();
                    if handler(&target, entry.is_intersecting()) == Watch::Release {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for target in targets {
                    observer.observe(target);
                }
                callback.forget();
            }
            Err(err) => tracing::warn!(error = ?err, "failed to create IntersectionObserver"),
        }
    }

    fn when_parsed(&self, task: Task) {
        if self.is_loading() {
            EventListener::once(&self.document, "DOMContentLoaded", move |_| task()).forget();
        } else {
            task();
        }
    }
}

impl Viewport for BrowserPage {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.window
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let overflow = if locked { "hidden" } else { "auto" };
            log_js_error(body.style().set_property("overflow", overflow), "style.setProperty");
        }
    }
}

impl PreferenceStore for BrowserPage {
    fn load(&self, key: &str) -> Result<Option<String>, VitrineError> {
        let storage = self.storage()?;
        Ok(storage.get_item(key).map_err(WebError::from)?)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), VitrineError> {
        let storage = self.storage()?;
        storage.set_item(key, value).map_err(WebError::from)?;
        Ok(())
    }
}

impl Scheduler for BrowserPage {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
