// ============================================================================
// NOTIFICATION - Modelo de notificaciones recibidas del servidor
// ============================================================================

use serde::Deserialize;

/// Tipo de notificación. El servidor puede introducir tipos nuevos sin romper
/// el cliente: cualquier string desconocido cae en `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewLeads,
    FollowUps,
    LeadUpdate,
    System,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Icono Font Awesome asociado al tipo
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::NewLeads => "exclamation-circle",
            NotificationKind::FollowUps => "calendar-alt",
            NotificationKind::LeadUpdate => "edit",
            NotificationKind::System => "info-circle",
            NotificationKind::Other => "bell",
        }
    }

    /// Destino de navegación al hacer click en la notificación
    pub fn target_href(&self) -> Option<&'static str> {
        match self {
            NotificationKind::NewLeads => Some("/broker/leads?status=novo"),
            NotificationKind::FollowUps => Some("/broker/leads"),
            _ => None,
        }
    }
}

/// Notificación tal como llega de `/api/notifications`. Vive un ciclo de
/// polling: se renderiza y se descarta.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub count: Option<u32>,
}

impl Notification {
    /// Cantidad efectiva para el badge: ausente o cero cuentan como 1
    pub fn effective_count(&self) -> u32 {
        match self.count {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kind() {
        let n: Notification =
            serde_json::from_str(r#"{"type":"new_leads","message":"Você tem 3 novos leads","count":3}"#)
                .unwrap();
        assert_eq!(n.kind, NotificationKind::NewLeads);
        assert_eq!(n.effective_count(), 3);
    }

    #[test]
    fn unknown_kind_falls_back_to_other() {
        let n: Notification =
            serde_json::from_str(r#"{"type":"promo_banner","message":"..."}"#).unwrap();
        assert_eq!(n.kind, NotificationKind::Other);
        assert_eq!(n.kind.icon(), "bell");
        assert_eq!(n.kind.target_href(), None);
    }

    #[test]
    fn missing_and_zero_count_default_to_one() {
        let absent: Notification =
            serde_json::from_str(r#"{"type":"system","message":"m"}"#).unwrap();
        let zero: Notification =
            serde_json::from_str(r#"{"type":"system","message":"m","count":0}"#).unwrap();
        assert_eq!(absent.effective_count(), 1);
        assert_eq!(zero.effective_count(), 1);
    }

    #[test]
    fn kinds_map_to_fixed_icons_and_links() {
        assert_eq!(NotificationKind::NewLeads.icon(), "exclamation-circle");
        assert_eq!(NotificationKind::FollowUps.icon(), "calendar-alt");
        assert_eq!(NotificationKind::LeadUpdate.icon(), "edit");
        assert_eq!(NotificationKind::System.icon(), "info-circle");
        assert_eq!(
            NotificationKind::NewLeads.target_href(),
            Some("/broker/leads?status=novo")
        );
        assert_eq!(NotificationKind::FollowUps.target_href(), Some("/broker/leads"));
        assert_eq!(NotificationKind::LeadUpdate.target_href(), None);
    }
}
