// ============================================================================
// NOTIFICATIONS VIEW - Badge + dropdown del menú de notificaciones
// ============================================================================
// Reducer puro (lista → modelo del menú) separado de la aplicación al DOM,
// que reemplaza el contenido completo en cada ciclo (sin diffing).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, query_selector, set_inner_html, set_style, set_text_content,
    ElementBuilder,
};
use crate::models::Notification;
use crate::services::ApiClient;

pub const EMPTY_TEXT: &str = "Nenhuma nova notificação";
pub const FOOTER_TEXT: &str = "Notificações são atualizadas automaticamente";

/// Modelo del menú de notificaciones
#[derive(Debug, Clone, PartialEq)]
pub struct MenuModel {
    /// Total para el badge (0 = badge oculto)
    pub total: u32,
    pub rows: Vec<MenuRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuRow {
    Item {
        icon: &'static str,
        message: String,
        href: Option<&'static str>,
    },
    Divider,
    Footer(&'static str),
    Placeholder(&'static str),
}

/// Reducer puro: lista de notificaciones → modelo del menú
pub fn build_menu(notifications: &[Notification]) -> MenuModel {
    let total = notifications.iter().map(Notification::effective_count).sum();

    let mut rows = Vec::with_capacity(notifications.len() + 2);
    if notifications.is_empty() {
        rows.push(MenuRow::Placeholder(EMPTY_TEXT));
    } else {
        for notification in notifications {
            rows.push(MenuRow::Item {
                icon: notification.kind.icon(),
                message: notification.message.clone(),
                href: notification.kind.target_href(),
            });
        }
        rows.push(MenuRow::Divider);
        rows.push(MenuRow::Footer(FOOTER_TEXT));
    }

    MenuModel { total, rows }
}

/// Aplicar el modelo al DOM. Idempotente: cada llamada reemplaza el
/// contenido anterior del badge y del dropdown.
pub fn render_menu(model: &MenuModel) -> Result<(), JsValue> {
    let (Some(badge), Some(dropdown)) = (
        get_element_by_id("notification-badge"),
        get_element_by_id("notification-dropdown"),
    ) else {
        return Ok(());
    };

    if model.total > 0 {
        set_text_content(&badge, &model.total.to_string());
        set_style(&badge, "display", "inline")?;
    } else {
        set_style(&badge, "display", "none")?;
    }

    set_inner_html(&dropdown, "");
    for row in &model.rows {
        append_child(&dropdown, &render_row(row)?)?;
    }

    Ok(())
}

fn render_row(row: &MenuRow) -> Result<Element, JsValue> {
    let content = match row {
        MenuRow::Item { icon, message, href } => {
            let icon_el = ElementBuilder::new("i")?
                .class(&format!("fas fa-{} me-2", icon))
                .build();
            let mut link = ElementBuilder::new("a")?
                .class("dropdown-item")
                .child(icon_el)?
                .text_node(message)?;
            if let Some(href) = href {
                link = link.attr("href", href)?;
            }
            link.build()
        }
        MenuRow::Divider => {
            let hr = ElementBuilder::new("hr")?.class("dropdown-divider").build();
            return ElementBuilder::new("li")?.child(hr).map(ElementBuilder::build);
        }
        MenuRow::Footer(text) => {
            let small = ElementBuilder::new("small")?.text(text).build();
            ElementBuilder::new("a")?
                .class("dropdown-item text-center text-muted")
                .child(small)?
                .build()
        }
        MenuRow::Placeholder(text) => ElementBuilder::new("span")?
            .class("dropdown-item-text text-muted")
            .text(text)
            .build(),
    };

    ElementBuilder::new("li")?.child(content).map(ElementBuilder::build)
}

/// Ciclo de polling: fetch + render. No-op sin `.navbar-nav` (usuario no
/// logueado). En caso de error deja la UI anterior intacta; el próximo poll
/// es la única recuperación.
pub async fn refresh_notifications() {
    match query_selector(".navbar-nav") {
        Ok(Some(_)) => {}
        _ => return,
    }

    let api = ApiClient::new();
    match api.fetch_notifications().await {
        Ok(notifications) => {
            let model = build_menu(&notifications);
            if let Err(e) = render_menu(&model) {
                log::error!("❌ Error renderizando notificaciones: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("❌ Error cargando notificaciones: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    fn notification(kind: NotificationKind, message: &str, count: Option<u32>) -> Notification {
        Notification {
            kind,
            message: message.to_string(),
            count,
        }
    }

    #[test]
    fn empty_list_renders_single_placeholder_and_no_badge() {
        let model = build_menu(&[]);
        assert_eq!(model.total, 0);
        assert_eq!(model.rows, vec![MenuRow::Placeholder(EMPTY_TEXT)]);
    }

    #[test]
    fn badge_total_sums_effective_counts() {
        let model = build_menu(&[
            notification(NotificationKind::NewLeads, "Você tem 3 novos leads", Some(3)),
            notification(NotificationKind::FollowUps, "2 follow-ups próximos", Some(2)),
            notification(NotificationKind::System, "Manutenção programada", None),
        ]);
        // 3 + 2 + 1 (count ausente cuenta como 1)
        assert_eq!(model.total, 6);
    }

    #[test]
    fn zero_count_still_contributes_one() {
        let model = build_menu(&[notification(NotificationKind::System, "m", Some(0))]);
        assert_eq!(model.total, 1);
    }

    #[test]
    fn items_carry_icon_and_link_by_kind() {
        let model = build_menu(&[
            notification(NotificationKind::NewLeads, "novos", Some(1)),
            notification(NotificationKind::LeadUpdate, "editado", None),
        ]);
        assert_eq!(
            model.rows[0],
            MenuRow::Item {
                icon: "exclamation-circle",
                message: "novos".to_string(),
                href: Some("/broker/leads?status=novo"),
            }
        );
        assert_eq!(
            model.rows[1],
            MenuRow::Item {
                icon: "edit",
                message: "editado".to_string(),
                href: None,
            }
        );
    }

    #[test]
    fn non_empty_menu_ends_with_divider_and_footer() {
        let model = build_menu(&[notification(NotificationKind::System, "m", None)]);
        assert_eq!(model.rows.len(), 3);
        assert_eq!(model.rows[1], MenuRow::Divider);
        assert_eq!(model.rows[2], MenuRow::Footer(FOOTER_TEXT));
    }
}
