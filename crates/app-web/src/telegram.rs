//! Telegram WebApp handshake. Fire-and-forget at startup: if the host
//! object is present, signal `ready()` and `expand()`; every step on that
//! path is optional and absence is a silent no-op.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn init_host(window: &web::Window) {
    let Some(webapp) = host_webapp(window) else {
        log::debug!("[host] Telegram.WebApp not present; skipping handshake");
        return;
    };
    call_optional(&webapp, "ready");
    call_optional(&webapp, "expand");
    log::info!("[host] Telegram.WebApp handshake sent");
}

fn host_webapp(window: &web::Window) -> Option<JsValue> {
    let tg = Reflect::get(window, &JsValue::from_str("Telegram")).ok()?;
    if tg.is_undefined() || tg.is_null() {
        return None;
    }
    let webapp = Reflect::get(&tg, &JsValue::from_str("WebApp")).ok()?;
    if webapp.is_undefined() || webapp.is_null() {
        return None;
    }
    Some(webapp)
}

/// Invoke a method only if the host object actually carries it.
fn call_optional(target: &JsValue, name: &str) {
    let Ok(value) = Reflect::get(target, &JsValue::from_str(name)) else {
        return;
    };
    if let Some(func) = value.dyn_ref::<Function>() {
        let _ = func.call0(target);
    }
}
