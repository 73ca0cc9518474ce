// ============================================================================
// COMMANDS - Superficie única de entrada para el markup del servidor
// ============================================================================
// En lugar de globales sueltos, el markup declara acciones con atributos
// data-command (más args en data-*) y un único listener delegado a nivel de
// document las despacha contra el registro.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::on_document_click;

/// Contexto de despacho: el elemento que declara el data-command
pub struct CommandContext {
    element: Element,
}

impl CommandContext {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Leer un argumento data-* del elemento disparador
    pub fn arg(&self, name: &str) -> Option<String> {
        self.element.get_attribute(&format!("data-{}", name))
    }
}

type CommandHandler = Rc<dyn Fn(&CommandContext)>;

thread_local! {
    static REGISTRY: RefCell<HashMap<&'static str, CommandHandler>> =
        RefCell::new(HashMap::new());
    static DELEGATION_INSTALLED: Cell<bool> = Cell::new(false);
}

/// Registrar un comando por nombre
pub fn register<F>(name: &'static str, handler: F)
where
    F: Fn(&CommandContext) + 'static,
{
    REGISTRY.with(|registry| {
        if registry.borrow_mut().insert(name, Rc::new(handler)).is_some() {
            log::warn!("⚠️ Comando '{}' ya estaba registrado, reemplazando", name);
        }
    });
}

/// Despachar un comando por nombre
pub fn dispatch(name: &str, context: &CommandContext) {
    // Clonar el handler fuera del borrow: un comando puede despachar otro
    let handler = REGISTRY.with(|registry| registry.borrow().get(name).cloned());
    match handler {
        Some(handler) => handler(context),
        None => log::warn!("⚠️ Comando desconocido: {}", name),
    }
}

/// Instalar el listener delegado de click (UNA sola vez)
pub fn install_delegation() -> Result<(), JsValue> {
    if DELEGATION_INSTALLED.with(|installed| installed.replace(true)) {
        log::warn!("⚠️ Delegación de comandos ya instalada, ignorando llamada duplicada");
        return Ok(());
    }

    on_document_click(|event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        let Ok(Some(command_el)) = element.closest("[data-command]") else {
            return;
        };
        let Some(name) = command_el.get_attribute("data-command") else {
            return;
        };
        dispatch(&name, &CommandContext::new(command_el));
    })
}
