// ============================================================================
// LEADS - Actualización de status con feedback vía toast
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::services::ApiClient;
use crate::utils::constants::RELOAD_DELAY_MS;
use crate::views::toast::{show_toast, ToastKind};

/// Decisión de feedback para el resultado del update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadFeedback {
    pub kind: ToastKind,
    pub message: &'static str,
    /// Some = recargar la página después de esta espera
    pub reload_after_ms: Option<u32>,
}

/// Clasificación pura del resultado: 2xx recarga, cualquier otra respuesta o
/// fallo de red solo avisa. No hay update optimista; la lista recién refleja
/// el cambio tras la recarga.
pub fn lead_feedback(outcome: &Result<u16, String>) -> LeadFeedback {
    match outcome {
        Ok(status) if (200..300).contains(status) => LeadFeedback {
            kind: ToastKind::Success,
            message: "Status do lead atualizado com sucesso",
            reload_after_ms: Some(RELOAD_DELAY_MS),
        },
        Ok(_) => LeadFeedback {
            kind: ToastKind::Danger,
            message: "Falha ao atualizar status do lead",
            reload_after_ms: None,
        },
        Err(_) => LeadFeedback {
            kind: ToastKind::Danger,
            message: "Erro ao atualizar status do lead",
            reload_after_ms: None,
        },
    }
}

/// POST del nuevo status y reflejo del resultado en la UI
pub async fn update_lead_status(lead_id: String, status: String) {
    let api = ApiClient::new();
    let outcome = api.update_lead_status(&lead_id, &status).await;

    if let Err(e) = &outcome {
        log::error!("❌ Error actualizando lead {}: {}", lead_id, e);
    }

    let feedback = lead_feedback(&outcome);
    if let Err(e) = show_toast(feedback.message, feedback.kind) {
        log::error!("❌ Error mostrando toast: {:?}", e);
    }

    if let Some(delay_ms) = feedback.reload_after_ms {
        Timeout::new(delay_ms, || {
            if let Some(window) = crate::dom::window() {
                let _ = window.location().reload();
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_toasts_success_and_schedules_reload() {
        let feedback = lead_feedback(&Ok(200));
        assert_eq!(feedback.kind, ToastKind::Success);
        assert_eq!(feedback.message, "Status do lead atualizado com sucesso");
        assert_eq!(feedback.reload_after_ms, Some(RELOAD_DELAY_MS));

        assert_eq!(lead_feedback(&Ok(204)).reload_after_ms, Some(RELOAD_DELAY_MS));
    }

    #[test]
    fn http_error_toasts_failure_without_reload() {
        let feedback = lead_feedback(&Ok(500));
        assert_eq!(feedback.kind, ToastKind::Danger);
        assert_eq!(feedback.message, "Falha ao atualizar status do lead");
        assert_eq!(feedback.reload_after_ms, None);

        assert_eq!(lead_feedback(&Ok(404)).reload_after_ms, None);
    }

    #[test]
    fn network_error_toasts_failure_without_reload() {
        let feedback = lead_feedback(&Err("Network error: timeout".to_string()));
        assert_eq!(feedback.kind, ToastKind::Danger);
        assert_eq!(feedback.message, "Erro ao atualizar status do lead");
        assert_eq!(feedback.reload_after_ms, None);
    }
}
