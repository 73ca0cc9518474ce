// ============================================================================
// BOOTSTRAP FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para los globales de Bootstrap - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// bootstrap.Tooltip
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Tooltip;

    /// bootstrap.Alert
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    pub fn new(element: &Element) -> Alert;

    #[wasm_bindgen(method)]
    pub fn close(this: &Alert);
}
