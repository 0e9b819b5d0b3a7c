//! Mobile menu button and outside-click close

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, Node};

use super::{document, element_by_id, listen};
use crate::config::{LandingConfig, Selectors};
use crate::consts::NAV_OPEN_CLASS;
use crate::init::{Outcome, StepResult};
use crate::ui::{MenuState, outside_click};

pub fn init(config: &LandingConfig) -> StepResult {
    let document = document()?;
    let button = element_by_id(&document, &config.selectors.menu_button_id)?;
    let nav = element_by_id(&document, &config.selectors.nav_links_id)?;

    // Button toggles
    {
        let button_clone = button.clone();
        let nav = nav.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let state = current(&nav).toggled();
            apply(&button_clone, &nav, state);
        });
        listen(&button, "click", closure)?;
    }

    // Click anywhere else closes
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if outside_click(button.contains(Some(&target)), nav.contains(Some(&target))) {
                apply(&button, &nav, current(&nav).closed());
            }
        });
        listen(&document, "click", closure)?;
    }

    Ok(Outcome::Installed)
}

/// Close the menu if it is open (after following an anchor)
pub fn close_if_open(document: &Document, selectors: &Selectors) {
    let Some(nav) = document.get_element_by_id(&selectors.nav_links_id) else {
        return;
    };
    let state = current(&nav);
    if !state.is_open() {
        return;
    }
    let _ = nav.class_list().remove_1(NAV_OPEN_CLASS);
    if let Some(button) = document.get_element_by_id(&selectors.menu_button_id) {
        button.set_text_content(Some(state.closed().glyph()));
    }
}

fn current(nav: &Element) -> MenuState {
    MenuState::from_open(nav.class_list().contains(NAV_OPEN_CLASS))
}

fn apply(button: &Element, nav: &Element, state: MenuState) {
    if let Err(e) = nav
        .class_list()
        .toggle_with_force(NAV_OPEN_CLASS, state.is_open())
    {
        log::warn!("Menu toggle failed: {}", super::describe(&e));
        return;
    }
    button.set_text_content(Some(state.glyph()));
}
