// ============================================================================
// APP - Controlador de página: cablea todos los comportamientos al cargar
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, CommandContext};
use crate::dom::on_page_hide;
use crate::services::Scheduler;
use crate::utils::clipboard::{copy_to_clipboard, print_page};
use crate::utils::constants::{DASHBOARD_PULSE_MS, NOTIFICATION_POLL_MS};
use crate::views::dashboard::pulse_metric_cards;
use crate::views::forms::enhance_forms;
use crate::views::leads::update_lead_status;
use crate::views::notifications::refresh_notifications;
use crate::views::tables::enhance_tables;
use crate::views::widgets::{auto_dismiss_alerts, init_tooltips};

/// Controlador principal de la página
pub struct App {
    scheduler: Scheduler,
}

impl App {
    /// Cablear todos los comportamientos sobre el DOM ya renderizado
    pub fn boot() -> Result<Self, JsValue> {
        let app = Self {
            scheduler: Scheduler::new(),
        };

        init_tooltips()?;

        // Notificaciones: carga inmediata + polling para toda la vida de la
        // página
        spawn_local(refresh_notifications());
        app.scheduler.every("notifications", NOTIFICATION_POLL_MS, || {
            spawn_local(refresh_notifications());
        });

        auto_dismiss_alerts()?;
        enhance_forms()?;

        if Self::current_path().contains("dashboard") {
            app.scheduler
                .every("dashboard-pulse", DASHBOARD_PULSE_MS, pulse_metric_cards);
        }

        enhance_tables()?;

        Self::register_commands();
        commands::install_delegation()?;

        app.install_teardown()?;

        log::info!("✅ [APP] Comportamientos de página cableados");
        Ok(app)
    }

    /// Comandos disponibles para el markup vía data-command
    fn register_commands() {
        commands::register("copy", |ctx: &CommandContext| match ctx.arg("copy-text") {
            Some(text) => copy_to_clipboard(&text),
            None => log::warn!("⚠️ Comando copy sin data-copy-text"),
        });

        commands::register("print", |_ctx: &CommandContext| print_page());

        commands::register("lead-status", |ctx: &CommandContext| {
            match (ctx.arg("lead-id"), ctx.arg("status")) {
                (Some(lead_id), Some(status)) => {
                    spawn_local(update_lead_status(lead_id, status));
                }
                _ => log::warn!("⚠️ Comando lead-status requiere data-lead-id y data-status"),
            }
        });
    }

    fn current_path() -> String {
        crate::dom::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    /// Liberar los jobs periódicos cuando la página se descarga
    fn install_teardown(&self) -> Result<(), JsValue> {
        let scheduler = self.scheduler.clone();
        on_page_hide(move |_| scheduler.cancel_all())
    }
}
