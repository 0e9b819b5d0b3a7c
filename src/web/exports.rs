//! `window.KhodrobanLanding` namespace for other scripts
//!
//! `debounce(fn, ms)` and `throttle(fn, ms)` return wrappers that forward up to
//! three arguments and call `fn` with `this` undefined.

use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use super::{anchor, faq, header, menu, reveal, timing};
use crate::config::LandingConfig;
use crate::consts::{GLOBAL_NAMESPACE, LOADING_CLASS};
use crate::error::EnhanceError;
use crate::init::{Initializer, StepResult, run_all};

type InitFn = fn(&LandingConfig) -> StepResult;

const INITIALIZERS: [(&str, &str, InitFn); 6] = [
    ("initMobileMenu", "mobile_menu", menu::init),
    ("initHeaderScroll", "header_scroll", header::init),
    ("initSmoothScrolling", "smooth_scrolling", anchor::init),
    ("initFAQ", "faq", faq::init),
    ("initFadeInObserver", "fade_in", reveal::init_fade_in),
    ("initLazyLoading", "lazy_avatars", reveal::init_lazy_avatars),
];

pub fn install(window: &Window, config: Rc<LandingConfig>) -> Result<(), EnhanceError> {
    let namespace = Object::new();

    for (export, name, init) in INITIALIZERS {
        let config = config.clone();
        let f = Closure::<dyn Fn()>::new(move || {
            run_all([Initializer::new(name, || init(&config))]);
        });
        set(&namespace, export, &f.into_js_value())?;
    }

    let debounce = Closure::<dyn Fn(Function, f64) -> Function>::new(timing::debounce);
    set(&namespace, "debounce", &debounce.into_js_value())?;
    let throttle = Closure::<dyn Fn(Function, f64) -> Function>::new(timing::throttle);
    set(&namespace, "throttle", &throttle.into_js_value())?;

    let show = Closure::<dyn Fn(JsValue)>::new(|el: JsValue| set_loading(&el, true));
    set(&namespace, "showLoading", &show.into_js_value())?;
    let hide = Closure::<dyn Fn(JsValue)>::new(|el: JsValue| set_loading(&el, false));
    set(&namespace, "hideLoading", &hide.into_js_value())?;

    set(window, GLOBAL_NAMESPACE, &namespace)?;
    Ok(())
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), EnhanceError> {
    Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

fn set_loading(value: &JsValue, loading: bool) {
    let Some(el) = value.dyn_ref::<Element>() else {
        log::warn!("{} expects an element", if loading { "showLoading" } else { "hideLoading" });
        return;
    };
    let _ = el.class_list().toggle_with_force(LOADING_CLASS, loading);
}
