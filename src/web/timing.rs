//! JS-callable debounce/throttle wrappers
//!
//! The returned functions forward up to `MAX_FORWARDED_ARGS` arguments and
//! call the wrapped function with `this` undefined.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{describe, now_ms};
use crate::timing::{Debounce, MAX_FORWARDED_ARGS, Throttle, passed_args};

type Wrapper = dyn FnMut(JsValue, JsValue, JsValue);

pub fn debounce(func: Function, wait_ms: f64) -> Function {
    let state = Rc::new(RefCell::new(Debounce::new(wait_ms)));
    let wrapped = Closure::<Wrapper>::new(move |a: JsValue, b: JsValue, c: JsValue| {
        let now = now_ms();
        let pending = state.borrow_mut().call(now);

        let state = state.clone();
        let func = func.clone();
        let args = collect_args([a, b, c]);
        let fire = Closure::once_into_js(move || {
            if state.borrow_mut().fire(pending.generation) {
                invoke(&func, &args);
            }
        });
        let delay = (pending.deadline - now).max(0.0) as i32;
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), delay);
        }
    });
    wrapped.into_js_value().unchecked_into()
}

pub fn throttle(func: Function, limit_ms: f64) -> Function {
    let mut state = Throttle::new(limit_ms);
    let wrapped = Closure::<Wrapper>::new(move |a: JsValue, b: JsValue, c: JsValue| {
        if state.try_acquire(now_ms()) {
            invoke(&func, &collect_args([a, b, c]));
        }
    });
    wrapped.into_js_value().unchecked_into()
}

fn collect_args(args: [JsValue; MAX_FORWARDED_ARGS]) -> Array {
    passed_args(&args, JsValue::is_undefined).iter().collect()
}

fn invoke(func: &Function, args: &Array) {
    if let Err(e) = func.apply(&JsValue::UNDEFINED, args) {
        log::error!("Wrapped callback threw: {}", describe(&e));
    }
}
