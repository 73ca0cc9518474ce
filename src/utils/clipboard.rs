// ============================================================================
// CLIPBOARD / PRINT - Capacidades de plataforma con feedback vía toast
// ============================================================================

use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::views::toast::{show_toast, ToastKind};

/// Abrir el diálogo de impresión del navegador
pub fn print_page() {
    if let Some(window) = crate::dom::window() {
        if let Err(e) = window.print() {
            log::error!("❌ Error abriendo el diálogo de impresión: {:?}", e);
        }
    }
}

/// Copiar texto al portapapeles (API async del navegador)
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_string();
    spawn_local(async move {
        let Some(window) = crate::dom::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => {
                if let Err(e) = show_toast("Copiado para a área de transferência", ToastKind::Success) {
                    log::error!("❌ Error mostrando toast: {:?}", e);
                }
            }
            Err(e) => {
                log::error!("❌ Could not copy text: {:?}", e);
                if let Err(e) =
                    show_toast("Falha ao copiar para a área de transferência", ToastKind::Danger)
                {
                    log::error!("❌ Error mostrando toast: {:?}", e);
                }
            }
        }
    });
}
