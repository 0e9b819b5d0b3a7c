//! Smooth scrolling for in-page links

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::{document, listen, query_all, window};
use crate::config::{LandingConfig, Selectors};
use crate::init::{Outcome, StepResult};
use crate::ui::{fragment_id, scroll_target};

pub fn init(config: &LandingConfig) -> StepResult {
    let document = document()?;
    let anchors = query_all(&document, &config.selectors.anchors)?;
    if anchors.is_empty() {
        return Ok(Outcome::Skipped("no in-page links".to_string()));
    }

    let selectors = Rc::new(config.selectors.clone());
    let header_offset = config.header_offset;
    for anchor in &anchors {
        let link = anchor.clone();
        let selectors = selectors.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_fragment(&link, header_offset, &selectors);
        });
        listen(anchor, "click", closure)?;
    }

    log::debug!("Smooth scrolling on {} links", anchors.len());
    Ok(Outcome::Installed)
}

/// Scroll to the link's target; a missing target does nothing
fn scroll_to_fragment(link: &Element, header_offset: f64, selectors: &Selectors) {
    let href = link.get_attribute("href").unwrap_or_default();
    let Some(id) = fragment_id(&href) else {
        return;
    };
    let (Ok(window), Ok(document)) = (window(), document()) else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No scroll target for {}", href);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(target.offset_top()), header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    super::menu::close_if_open(&document, selectors);
}
