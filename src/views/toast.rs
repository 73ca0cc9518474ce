// ============================================================================
// TOAST - Banner transitorio con auto-cierre
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::dom::{append_child, document, ElementBuilder};
use crate::utils::bootstrap_ffi::Alert;
use crate::utils::constants::TOAST_DISMISS_MS;

/// Estilo del toast, mapeado a las clases alert-* de Bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn css_suffix(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Danger => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Para llamadas desde markup con el tipo como string; default info
    pub fn parse_or_info(value: &str) -> Self {
        match value {
            "success" => ToastKind::Success,
            "danger" => ToastKind::Danger,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }
}

/// Mostrar un toast fijo arriba a la derecha. Los toasts concurrentes se
/// apilan por orden de inserción; cada uno se auto-cierra a los 4s si el
/// usuario no lo descartó antes.
pub fn show_toast(message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let close_button = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("data-bs-dismiss", "alert")?
        .build();

    let toast = ElementBuilder::new("div")?
        .class(&format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            kind.css_suffix()
        ))
        .attr("style", "top: 20px; right: 20px; z-index: 9999; min-width: 300px;")?
        .text_node(message)?
        .child(close_button)?
        .build();

    append_child(&body, &toast)?;

    let toast_ref = toast.clone();
    Timeout::new(TOAST_DISMISS_MS, move || {
        // El usuario puede haberlo cerrado con el botón
        if toast_ref.is_connected() {
            Alert::new(&toast_ref).close();
        }
    })
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_bootstrap_suffix() {
        assert_eq!(ToastKind::Success.css_suffix(), "success");
        assert_eq!(ToastKind::Danger.css_suffix(), "danger");
        assert_eq!(ToastKind::Warning.css_suffix(), "warning");
        assert_eq!(ToastKind::Info.css_suffix(), "info");
    }

    #[test]
    fn unknown_kind_string_defaults_to_info() {
        assert_eq!(ToastKind::parse_or_info("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse_or_info("primary"), ToastKind::Info);
        assert_eq!(ToastKind::parse_or_info(""), ToastKind::Info);
    }
}
