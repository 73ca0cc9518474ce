// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye,
//   el navegador limpia los listeners asociados, por lo que closure.forget()
//   es seguro para listeners locales.
// - Para listeners globales (window/document): registrarlos UNA sola vez al
//   inicio de la app; si se registran varias veces se acumulan.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, FocusEvent, InputEvent, MouseEvent};

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // closure.forget() mantiene el closure vivo durante la vida del listener
    closure.forget();
    Ok(())
}

/// Click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Input handler
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    listen(element, "input", handler)
}

/// Blur handler
pub fn on_blur<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    listen(element, "blur", handler)
}

/// Submit handler (sobre un elemento form)
pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "submit", handler)
}

/// Mouse enter handler
pub fn on_mouse_enter<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "mouseenter", handler)
}

/// Mouse leave handler
pub fn on_mouse_leave<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "mouseleave", handler)
}

/// Click handler delegado a nivel de document (registrar UNA sola vez)
pub fn on_document_click<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    listen(&document, "click", handler)
}

/// Pagehide handler a nivel de window (registrar UNA sola vez)
pub fn on_page_hide<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = crate::dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&window, "pagehide", handler)
}
