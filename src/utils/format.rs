// ============================================================================
// FORMAT - Fechas absolutas y tiempo relativo
// ============================================================================

use js_sys::Date;
use wasm_bindgen::JsValue;

/// Locale de la aplicación (strings de UI hardcodeados en pt-BR)
const APP_LOCALE: &str = "pt-BR";

/// Fecha + hora en el locale de la aplicación
pub fn format_date(date_string: &str) -> String {
    let date = Date::new(&JsValue::from_str(date_string));
    format!("{} {}", locale_date(&date), locale_time(&date))
}

/// Tiempo relativo ("Agora mesmo", "N minutos atrás", ...); después de una
/// semana cae a la fecha en formato de locale
pub fn format_relative_time(date_string: &str) -> String {
    let date = Date::new(&JsValue::from_str(date_string));
    let elapsed_ms = Date::now() - date.get_time();
    relative_label(elapsed_ms).unwrap_or_else(|| locale_date(&date))
}

/// Bucketing puro del tiempo transcurrido, redondeando hacia abajo.
/// None indica que el caller debe usar la fecha absoluta.
pub fn relative_label(elapsed_ms: f64) -> Option<String> {
    let minutes = (elapsed_ms / 60_000.0).floor() as i64;
    if minutes < 1 {
        return Some("Agora mesmo".to_string());
    }
    if minutes < 60 {
        return Some(format!("{} minutos atrás", minutes));
    }
    let hours = minutes / 60;
    if hours < 24 {
        return Some(format!("{} horas atrás", hours));
    }
    let days = hours / 24;
    if days < 7 {
        return Some(format!("{} dias atrás", days));
    }
    None
}

fn locale_date(date: &Date) -> String {
    String::from(date.to_locale_date_string(APP_LOCALE, &JsValue::UNDEFINED))
}

fn locale_time(date: &Date) -> String {
    String::from(date.to_locale_time_string(APP_LOCALE))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE_MS: f64 = 60_000.0;
    const HOUR_MS: f64 = 60.0 * MINUTE_MS;
    const DAY_MS: f64 = 24.0 * HOUR_MS;

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(relative_label(30_000.0).as_deref(), Some("Agora mesmo"));
        assert_eq!(relative_label(0.0).as_deref(), Some("Agora mesmo"));
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(relative_label(-5_000.0).as_deref(), Some("Agora mesmo"));
    }

    #[test]
    fn minutes_bucket() {
        assert_eq!(relative_label(5.0 * MINUTE_MS).as_deref(), Some("5 minutos atrás"));
        assert_eq!(relative_label(59.0 * MINUTE_MS).as_deref(), Some("59 minutos atrás"));
    }

    #[test]
    fn hours_bucket_rounds_down() {
        assert_eq!(relative_label(90.0 * MINUTE_MS).as_deref(), Some("1 horas atrás"));
        assert_eq!(relative_label(3.0 * HOUR_MS).as_deref(), Some("3 horas atrás"));
        assert_eq!(relative_label(23.0 * HOUR_MS).as_deref(), Some("23 horas atrás"));
    }

    #[test]
    fn days_bucket() {
        assert_eq!(relative_label(26.0 * HOUR_MS).as_deref(), Some("1 dias atrás"));
        assert_eq!(relative_label(6.0 * DAY_MS).as_deref(), Some("6 dias atrás"));
    }

    #[test]
    fn a_week_or_more_falls_back_to_absolute_date() {
        assert_eq!(relative_label(7.0 * DAY_MS), None);
        assert_eq!(relative_label(10.0 * DAY_MS), None);
    }
}
