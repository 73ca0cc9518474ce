/// URL base del API. Vacía por defecto (mismo origen que la página),
/// configurable en tiempo de compilación vía API_BASE_URL (ver build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// Polling de notificaciones
pub const NOTIFICATION_POLL_MS: u32 = 30_000;

/// Pulso de métricas del dashboard
pub const DASHBOARD_PULSE_MS: u32 = 60_000;

/// Vuelta a escala normal después del pulso
pub const PULSE_RESET_MS: u32 = 200;

/// Auto-cierre de mensajes flash
pub const ALERT_DISMISS_MS: u32 = 5_000;

/// Deadline de reactivación del botón de submit
pub const SUBMIT_FALLBACK_MS: u32 = 5_000;

/// Auto-cierre de toasts
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Debounce de inputs de búsqueda
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Espera antes de recargar tras actualizar un lead
pub const RELOAD_DELAY_MS: u32 = 1_000;
