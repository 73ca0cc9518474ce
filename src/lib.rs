// ============================================================================
// MM CONECTA LEADS - FRONTEND DE PÁGINA (RUST/WASM)
// ============================================================================
// Glue de UI sobre las páginas renderizadas por el servidor:
// - App: cablea los comportamientos al cargar (tooltips, polling, forms...)
// - commands: superficie de entrada para el markup (data-command)
// - Exports #[wasm_bindgen]: utilidades invocables desde otros scripts
// ============================================================================

pub mod app;
pub mod commands;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;

// Instancia global de App para mantenerla viva durante la vida de la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 MM Conecta Leads - frontend iniciando...");

    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if document.ready_state() == "loading" {
        // El módulo puede cargarse antes de que el DOM esté parseado
        // Nota: este listener global se registra UNA sola vez en el start
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            boot_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        boot_app();
    }

    Ok(())
}

fn boot_app() {
    match App::boot() {
        Ok(app) => APP.with(|cell| *cell.borrow_mut() = Some(app)),
        Err(e) => log::error!("❌ [APP] Error inicializando la página: {:?}", e),
    }
}

// ============================================================================
// Superficie explícita para scripts de la aplicación
// ============================================================================

/// Mostrar un toast; kind: success | danger | warning | info (default info)
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast_js(message: &str, kind: Option<String>) {
    let kind = views::toast::ToastKind::parse_or_info(kind.as_deref().unwrap_or("info"));
    if let Err(e) = views::toast::show_toast(message, kind) {
        log::error!("❌ Error mostrando toast: {:?}", e);
    }
}

/// Actualizar el status de un lead y reflejar el resultado en la UI
#[wasm_bindgen(js_name = updateLeadStatus)]
pub fn update_lead_status_js(lead_id: String, status: String) {
    spawn_local(views::leads::update_lead_status(lead_id, status));
}

/// Abrir el diálogo de impresión
#[wasm_bindgen(js_name = printPage)]
pub fn print_page_js() {
    utils::clipboard::print_page();
}

/// Copiar texto al portapapeles con feedback vía toast
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard_js(text: &str) {
    utils::clipboard::copy_to_clipboard(text);
}

/// Fecha + hora en el locale de la aplicación
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(date_string: &str) -> String {
    utils::format::format_date(date_string)
}

/// Tiempo relativo ("Agora mesmo", "N minutos atrás", ...)
#[wasm_bindgen(js_name = formatRelativeTime)]
pub fn format_relative_time_js(date_string: &str) -> String {
    utils::format::format_relative_time(date_string)
}
