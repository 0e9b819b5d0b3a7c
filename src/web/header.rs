//! Header scrolled style

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, Window};

use super::{document, element_by_id, listen, now_ms, window};
use crate::config::LandingConfig;
use crate::consts::HEADER_SCROLLED_CLASS;
use crate::init::{Outcome, StepResult};
use crate::ui::{HeaderScroll, HeaderStyle, ScrollAction};

pub fn init(config: &LandingConfig) -> StepResult {
    let window = window()?;
    let header = element_by_id(&document()?, &config.selectors.header_id)?;

    let state = Rc::new(RefCell::new(HeaderScroll::new(
        HeaderStyle::with_applied(
            config.header_scroll_threshold,
            header.class_list().contains(HEADER_SCROLLED_CLASS),
        ),
        config.header_throttle_ms,
    )));

    let window_clone = window.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
        let Ok(scroll_y) = window_clone.scroll_y() else {
            return;
        };
        let action = state.borrow_mut().on_scroll(now_ms(), scroll_y);
        perform(&window_clone, &header, &state, action);
    });
    listen(&window, "scroll", closure)?;

    Ok(Outcome::Installed)
}

fn perform(window: &Window, header: &Element, state: &Rc<RefCell<HeaderScroll>>, action: ScrollAction) {
    match action {
        ScrollAction::Apply(scrolled) => {
            let _ = header
                .class_list()
                .toggle_with_force(HEADER_SCROLLED_CLASS, scrolled);
        }
        ScrollAction::Defer { delay_ms } => {
            let window_clone = window.clone();
            let header = header.clone();
            let state = state.clone();
            let trailing = Closure::once_into_js(move || {
                let scroll_y = window_clone.scroll_y().unwrap_or_default();
                let action = state.borrow_mut().on_trailing(now_ms(), scroll_y);
                perform(&window_clone, &header, &state, action);
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                trailing.unchecked_ref(),
                delay_ms.ceil() as i32,
            );
        }
        ScrollAction::Idle => {}
    }
}
