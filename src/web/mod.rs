//! Browser bindings
//!
//! Wires the platform-independent handlers to the DOM. Listener closures live
//! for the whole page and are leaked with `Closure::forget`.

pub mod anchor;
pub mod diagnostics;
pub mod exports;
pub mod faq;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod timing;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, Window};

use crate::config::LandingConfig;
use crate::consts::JS_ENABLED_CLASS;
use crate::error::EnhanceError;
use crate::init::{Initializer, run_all};

#[wasm_bindgen(start)]
pub fn start() {
    run();
}

/// Page entry: logging, diagnostics, exports, then the handlers once the DOM is ready
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        // Another script already installed a logger
        log::warn!("Logger already initialized");
    }

    let config = Rc::new(LandingConfig::load());
    log::set_max_level(
        config
            .log_level()
            .unwrap_or(log::Level::Info)
            .to_level_filter(),
    );

    let (window, document) = match page() {
        Ok(page) => page,
        Err(e) => {
            log::error!("Landing enhancements disabled: {}", e);
            return;
        }
    };

    if let Some(root) = document.document_element() {
        let _ = root.class_list().add_1(JS_ENABLED_CLASS);
    }

    if let Err(e) = diagnostics::install(&window) {
        log::warn!("Diagnostics unavailable: {}", e);
    }
    if let Err(e) = exports::install(&window, config.clone()) {
        log::warn!("Global namespace unavailable: {}", e);
    }

    let ready = move || {
        let report = run_all(initializers(&config));
        log::info!(
            "Landing page ready ({} installed, {} skipped, {} failed)",
            report.installed().len(),
            report.skipped().len(),
            report.failed().len()
        );
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(ready);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            log::error!("Could not wait for DOMContentLoaded: {}", EnhanceError::from(e));
        }
    } else {
        ready();
    }
}

/// Page-ready handlers, in installation order
pub fn initializers(config: &LandingConfig) -> Vec<Initializer<'_>> {
    vec![
        Initializer::new("mobile_menu", move || menu::init(config)),
        Initializer::new("header_scroll", move || header::init(config)),
        Initializer::new("smooth_scrolling", move || anchor::init(config)),
        Initializer::new("faq", move || faq::init(config)),
        Initializer::new("fade_in", move || reveal::init_fade_in(config)),
        Initializer::new("lazy_avatars", move || reveal::init_lazy_avatars(config)),
    ]
}

pub(crate) fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::MissingCapability("window"))
}

pub(crate) fn document() -> Result<Document, EnhanceError> {
    document_of(&window()?)
}

fn page() -> Result<(Window, Document), EnhanceError> {
    let window = window()?;
    let document = document_of(&window)?;
    Ok((window, document))
}

fn document_of(window: &Window) -> Result<Document, EnhanceError> {
    window
        .document()
        .ok_or(EnhanceError::MissingCapability("document"))
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, EnhanceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EnhanceError::MissingElement(format!("#{}", id)))
}

/// All elements matching a selector, in document order
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener for the page lifetime
pub(crate) fn listen<T>(
    target: &EventTarget,
    event: &str,
    closure: Closure<T>,
) -> Result<(), EnhanceError>
where
    T: ?Sized + WasmClosure,
{
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Milliseconds from the page's monotonic clock
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Best-effort text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
