//! Global error capture and page-load timing

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, Event, PromiseRejectionEvent, Window};

use super::{describe, listen};
use crate::diagnostics::{ErrorReport, LogReporter, Reporter, page_load_ms};
use crate::error::EnhanceError;

pub fn install(window: &Window) -> Result<(), EnhanceError> {
    install_with(window, LogReporter)
}

/// Route uncaught errors and rejections to `reporter`
pub fn install_with<R>(window: &Window, reporter: R) -> Result<(), EnhanceError>
where
    R: Reporter + Clone + 'static,
{
    {
        let reporter = reporter.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: ErrorEvent| {
            let error = event.error();
            let message = if error.is_undefined() || error.is_null() {
                event.message()
            } else {
                describe(&error)
            };
            let report = ErrorReport::uncaught(message).at(
                &event.filename(),
                event.lineno(),
                event.colno(),
            );
            reporter.report(&report);
        });
        listen(window, "error", closure)?;
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PromiseRejectionEvent| {
            reporter.report(&ErrorReport::rejection(describe(&event.reason())));
        });
        listen(window, "unhandledrejection", closure)?;
    }

    // loadEventEnd is only recorded after load handlers return
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let log_timing = Closure::once_into_js(log_page_load);
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(log_timing.unchecked_ref(), 0);
        });
        listen(window, "load", closure)?;
    }

    Ok(())
}

fn log_page_load() {
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let entry = performance.get_entries_by_type("navigation").get(0);
    if entry.is_undefined() {
        return;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(&entry, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    };
    if let Some(ms) = page_load_ms(field("fetchStart"), field("loadEventEnd")) {
        log::info!("Page load time: {:.0}ms", ms);
    }
}
