// ============================================================================
// TABLES - Hover de filas, confirmación de borrado y búsqueda con debounce
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{
    on_click, on_input, on_mouse_enter, on_mouse_leave, query_selector_all, remove_style, set_style,
};
use crate::utils::constants::SEARCH_DEBOUNCE_MS;

pub const DELETE_CONFIRM_TEXT: &str =
    "Tem certeza que deseja excluir este item? Esta ação não pode ser desfeita.";

const ROW_HOVER_BACKGROUND: &str = "rgba(255, 255, 255, 0.05)";

/// Cablear las tablas y los inputs de búsqueda de la página
pub fn enhance_tables() -> Result<(), JsValue> {
    wire_row_hover()?;
    wire_delete_confirmations()?;
    wire_search_debounce()?;
    Ok(())
}

fn wire_row_hover() -> Result<(), JsValue> {
    for row in query_selector_all("table tbody tr")? {
        let enter_row = row.clone();
        on_mouse_enter(&row, move |_| {
            let _ = set_style(&enter_row, "background-color", ROW_HOVER_BACKGROUND);
        })?;

        let leave_row = row.clone();
        on_mouse_leave(&row, move |_| {
            let _ = remove_style(&leave_row, "background-color");
        })?;
    }
    Ok(())
}

/// Cualquier control que sugiera un borrado queda detrás de un confirm
/// bloqueante; declinar cancela la acción por completo
fn wire_delete_confirmations() -> Result<(), JsValue> {
    let selector = "button[onclick*=\"delete\"], form[action*=\"delete\"] button[type=\"submit\"]";
    for button in query_selector_all(selector)? {
        on_click(&button, move |event| {
            let confirmed = crate::dom::window()
                .map(|w| w.confirm_with_message(DELETE_CONFIRM_TEXT).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Punto de extensión: por ahora el listener con debounce solo loguea la
/// búsqueda
fn wire_search_debounce() -> Result<(), JsValue> {
    let selector = "input[type=\"search\"], input[placeholder*=\"search\"]";
    for element in query_selector_all(selector)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let mut pending: Option<Timeout> = None;
        let input_ref = input.clone();
        on_input(&input, move |_| {
            let query = input_ref.value();
            // Soltar el timeout pendiente lo cancela
            drop(pending.take());
            pending = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                log::info!("🔍 Buscando: {}", query);
            }));
        })?;
    }
    Ok(())
}
