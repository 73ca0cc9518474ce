// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::Notification;
use crate::utils::constants::API_BASE_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Obtener notificaciones del usuario logueado
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>, String> {
        let url = format!("{}/api/notifications", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<Notification>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Actualizar el status de un lead (body form-encoded: status=<valor>).
    /// Retorna el status HTTP de la respuesta; Err solo ante fallo de red o
    /// de armado del request.
    pub async fn update_lead_status(&self, lead_id: &str, status: &str) -> Result<u16, String> {
        let url = format!("{}/broker/leads/{}/update", self.base_url, lead_id);
        let body = format!("status={}", js_sys::encode_uri_component(status));

        log::info!("📋 Actualizando lead {} → {}", lead_id, status);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Ok(response.status())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
