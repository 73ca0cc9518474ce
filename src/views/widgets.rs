// ============================================================================
// WIDGETS - Bootstrap de tooltips y auto-cierre de mensajes flash
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::dom::query_selector_all;
use crate::utils::bootstrap_ffi::{Alert, Tooltip};
use crate::utils::constants::ALERT_DISMISS_MS;

/// Instanciar un tooltip de Bootstrap sobre cada elemento marcado
pub fn init_tooltips() -> Result<(), JsValue> {
    let elements = query_selector_all("[data-bs-toggle=\"tooltip\"]")?;
    let count = elements.len();
    for element in &elements {
        let _ = Tooltip::new(element);
    }
    if count > 0 {
        log::debug!("💬 {} tooltips inicializados", count);
    }
    Ok(())
}

/// Auto-cierre de los mensajes flash no permanentes a los 5s
pub fn auto_dismiss_alerts() -> Result<(), JsValue> {
    for alert in query_selector_all(".alert:not(.alert-permanent)")? {
        Timeout::new(ALERT_DISMISS_MS, move || {
            Alert::new(&alert).close();
        })
        .forget();
    }
    Ok(())
}
