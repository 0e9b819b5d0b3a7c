//! IntersectionObserver wiring for the reveal groups
//!
//! Slot `i` of a group's `RevealSet` arena is `elements[i]`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::{document, query_all, window};
use crate::config::LandingConfig;
use crate::consts::REVEALED_CLASS;
use crate::error::EnhanceError;
use crate::init::{Outcome, StepResult};
use crate::reveal::{ElementId, Intersection, RevealOptions, RevealSet};

struct Group {
    set: RevealSet,
    elements: Vec<Element>,
}

impl Group {
    fn new(options: &RevealOptions, elements: Vec<Element>) -> Self {
        let mut set = RevealSet::new(options.clone());
        set.watch_all(elements.len());
        Self { set, elements }
    }

    fn slot(&self, target: &Element) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| js_sys::Object::is(el, target))
            .map(ElementId)
    }

    fn mark(&self, id: ElementId) -> Option<&Element> {
        let el = self.elements.get(id.0)?;
        let _ = el.class_list().add_1(REVEALED_CLASS);
        Some(el)
    }
}

pub fn has_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Content cards. Without the observer they keep their base layout.
pub fn init_fade_in(config: &LandingConfig) -> StepResult {
    let window = window()?;
    if !has_intersection_observer(&window) {
        return Err(EnhanceError::MissingCapability("IntersectionObserver"));
    }
    let elements = query_all(&document()?, &config.selectors.fade_in_query())?;
    if elements.is_empty() {
        return Ok(Outcome::Skipped("no content cards".to_string()));
    }
    observe(Group::new(&config.fade_in, elements))?;
    Ok(Outcome::Installed)
}

/// Avatars. Without the observer every avatar is revealed immediately.
pub fn init_lazy_avatars(config: &LandingConfig) -> StepResult {
    let window = window()?;
    let elements = query_all(&document()?, &config.selectors.avatars)?;
    if elements.is_empty() {
        return Ok(Outcome::Skipped("no avatars".to_string()));
    }

    let mut group = Group::new(&config.avatars, elements);
    if !has_intersection_observer(&window) {
        let revealed = group.set.reveal_all();
        for id in &revealed {
            group.mark(*id);
        }
        log::info!(
            "IntersectionObserver unavailable, revealed {} avatars",
            revealed.len()
        );
        return Ok(Outcome::Installed);
    }

    observe(group)?;
    Ok(Outcome::Installed)
}

fn observe(group: Group) -> Result<(), EnhanceError> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(group.set.options().threshold));
    init.set_root_margin(&group.set.options().margin()?.to_css());

    let targets = group.elements.clone();
    let group = Rc::new(RefCell::new(group));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut g = group.borrow_mut();
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let id = g.slot(&entry.target())?;
                    Some(Intersection::new(
                        id,
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    ))
                })
                .collect();

            let revealed = g.set.notify(&batch);
            for id in revealed {
                if let Some(el) = g.mark(id) {
                    observer.unobserve(el);
                }
            }
        },
    );

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::debug!("Observing {} elements", targets.len());
    Ok(())
}
