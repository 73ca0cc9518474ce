// ============================================================================
// DASHBOARD - Pulso visual de las tarjetas de métricas
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::dom::{query_selector_all, set_style};
use crate::utils::constants::PULSE_RESET_MS;

const METRIC_CARD_SELECTOR: &str =
    ".card.bg-primary, .card.bg-success, .card.bg-info, .card.bg-warning";

/// Pulso cosmético de las tarjetas de métricas: escala a 1.02 y vuelve a
/// 1.0 a los 200ms. No refetchea datos.
pub fn pulse_metric_cards() {
    let cards = match query_selector_all(METRIC_CARD_SELECTOR) {
        Ok(cards) => cards,
        Err(e) => {
            log::error!("❌ Error buscando tarjetas de métricas: {:?}", e);
            return;
        }
    };

    for card in cards {
        let _ = set_style(&card, "transform", "scale(1.02)");
        let card_ref = card.clone();
        Timeout::new(PULSE_RESET_MS, move || {
            let _ = set_style(&card_ref, "transform", "scale(1)");
        })
        .forget();
    }
}
