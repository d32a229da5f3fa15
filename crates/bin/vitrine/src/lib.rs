//! # vitrine: portfolio page behaviors
//!
//! Composition root that wires the browser adapter to the behaviors and
//! starts them when the WebAssembly module is instantiated.
//!
//! ## Responsibilities
//! - Parse configuration from the embedded `#vitrine-config` JSON block
//! - Initialize the console logging subscriber
//! - Construct the browser page (adapter)
//! - Install every behavior, injecting the page via port traits
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no behavior logic belongs here.

pub mod config;
pub mod logging;

use std::error::Error;
use std::rc::Rc;

use vitrine_adapter_web::BrowserPage;
use vitrine_app::Behaviors;
use wasm_bindgen::prelude::*;

use crate::config::{CONFIG_ELEMENT_ID, Config};

/// Entry point run on module instantiation.
///
/// # Errors
///
/// Fails outside a browsing context or when the configuration block is
/// invalid. The error text surfaces in the browser console.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let page = BrowserPage::new().map_err(|err| to_js_error(&err))?;
    let embedded = page.embedded_text(CONFIG_ELEMENT_ID);
    let config = Config::from_embedded(embedded.as_deref()).map_err(|err| to_js_error(&err))?;

    logging::init(&config.logging.filter);

    let page = Rc::new(page);
    let behaviors = Behaviors::install(&page, &config.settings);
    tracing::info!(
        back_to_top = behaviors.back_to_top.is_some(),
        filter = behaviors.filter.is_some(),
        lightbox = behaviors.lightbox.is_some(),
        "vitrine started"
    );
    Ok(())
}

fn to_js_error(err: &dyn Error) -> JsValue {
    JsValue::from_str(&error_chain(err))
}

/// `outer: inner: root` rendering of an error and its sources.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn should_render_single_error_without_sources() {
        let err = vitrine_adapter_web::WebError::NoWindow;
        assert_eq!(error_chain(&err), "no global `window`");
    }

    #[test]
    fn should_render_validation_source_in_chain() {
        let err = Config::from_json(r#"{ "settings": { "storage_key": "" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let rendered = error_chain(&err);
        assert!(rendered.starts_with("invalid configuration: "));
        assert!(rendered.contains("storage_key"));
    }
}
