//! WebAssembly FFI bindings for the Crux Core
//!
//! The page's JavaScript shell forwards UI events here and executes the
//! returned effects (fetch, location replace, event suppression, render).

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Console logger not installed: {e}");
    }
}

/// Process a serialized Event from the shell and return serialized Effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("Failed to process event: {e}");
    }
    effects
}

/// Serialized view model (panel visibility)
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("Failed to serialize view model: {e}");
    }
    view
}

/// Resolve an effect with the shell's serialized output, e.g. an HTTP
/// response, and return any follow-up Effects.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("Failed to handle response for effect {id}: {e}");
    }
    effects
}
