// ============================================================================
// FORMS - Estado de carga del submit + validación de email + máscara de
// teléfono
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement};

use crate::dom::{
    add_class, on_blur, on_input, on_submit, query_selector_all, query_selector_all_in,
    remove_class,
};
use crate::utils::constants::SUBMIT_FALLBACK_MS;

const PROCESSING_HTML: &str = "<i class=\"fas fa-spinner fa-spin me-2\"></i>Processando...";

/// Guard del botón de submit: deshabilita + spinner al engancharse y
/// restaura en lo que ocurra primero entre `settle()` y el deadline de
/// respaldo. La restauración es idempotente.
pub struct SubmitGuard {
    state: Rc<RefCell<Option<ButtonState>>>,
}

struct ButtonState {
    button: HtmlButtonElement,
    original_html: String,
}

impl SubmitGuard {
    /// Poner el botón en estado "Processando..." y programar el deadline
    pub fn engage(button: HtmlButtonElement) -> Self {
        let original_html = button.inner_html();
        button.set_inner_html(PROCESSING_HTML);
        button.set_disabled(true);

        let state = Rc::new(RefCell::new(Some(ButtonState {
            button,
            original_html,
        })));

        let deadline_state = state.clone();
        Timeout::new(SUBMIT_FALLBACK_MS, move || restore(&deadline_state)).forget();

        Self { state }
    }

    /// Liquidación explícita del request: restaura el botón ya; el deadline
    /// posterior queda sin efecto
    pub fn settle(&self) {
        restore(&self.state);
    }
}

fn restore(state: &Rc<RefCell<Option<ButtonState>>>) {
    if let Some(s) = state.borrow_mut().take() {
        s.button.set_inner_html(&s.original_html);
        s.button.set_disabled(false);
    }
}

/// Cablear todos los forms de la página: estado de carga en el submit,
/// validación de emails al blur y máscara de teléfonos al tipear
pub fn enhance_forms() -> Result<(), JsValue> {
    for form in query_selector_all("form")? {
        wire_submit_loading(&form)?;

        for input in query_selector_all_in(&form, "input[type=\"email\"]")? {
            wire_email_validation(input)?;
        }

        for input in query_selector_all_in(&form, "input[name=\"phone\"], input[type=\"tel\"]")? {
            wire_phone_mask(input)?;
        }
    }
    Ok(())
}

fn wire_submit_loading(form: &Element) -> Result<(), JsValue> {
    let form_ref = form.clone();
    on_submit(form, move |_event| {
        if let Ok(Some(button)) = form_ref.query_selector("button[type=\"submit\"]") {
            if let Ok(button) = button.dyn_into::<HtmlButtonElement>() {
                // El submit nativo navega; el guard queda vivo dentro del
                // timeout de respaldo
                let _guard = SubmitGuard::engage(button);
            }
        }
    })
}

fn wire_email_validation(element: Element) -> Result<(), JsValue> {
    let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
        return Ok(());
    };
    let input_ref = input.clone();
    on_blur(&input, move |_| apply_email_validation(&input_ref))
}

fn apply_email_validation(input: &HtmlInputElement) {
    let _ = remove_class(input, "is-valid");
    let _ = remove_class(input, "is-invalid");
    if let Some(class) = email_validation_class(&input.value()) {
        let _ = add_class(input, class);
    }
}

fn wire_phone_mask(element: Element) -> Result<(), JsValue> {
    let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
        return Ok(());
    };
    let input_ref = input.clone();
    on_input(&input, move |_| {
        input_ref.set_value(&mask_phone(&input_ref.value()));
    })
}

/// Clase de validación para un campo de email: input vacío no recibe
/// ninguna, el resto exactamente una de is-valid / is-invalid
pub fn email_validation_class(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    Some(if is_valid_email(value) {
        "is-valid"
    } else {
        "is-invalid"
    })
}

/// Forma local@dominio: un solo @, sin espacios, y un punto interior en el
/// dominio
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Máscara posicional sobre los dígitos: (DDD) DDD-DDDD.
/// Los dígitos después del décimo se descartan.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}){}", &digits[..3], &digits[3..]),
        6..=9 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..10]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_full_ten_digit_number() {
        assert_eq!(mask_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn masks_partial_numbers() {
        assert_eq!(mask_phone("555123"), "(555) 123");
        assert_eq!(mask_phone("555"), "(555)");
        assert_eq!(mask_phone("5551"), "(555)1");
        assert_eq!(mask_phone("55512345"), "(555) 12345");
        assert_eq!(mask_phone("55"), "55");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn strips_non_digits_before_masking() {
        assert_eq!(mask_phone("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(mask_phone("abc555x123"), "(555) 123");
    }

    #[test]
    fn digits_beyond_the_tenth_are_dropped() {
        assert_eq!(mask_phone("55512345678"), "(555) 123-4567");
        assert_eq!(mask_phone("555123456789012"), "(555) 123-4567");
    }

    #[test]
    fn valid_email_gets_valid_class() {
        assert_eq!(email_validation_class("a@b.co"), Some("is-valid"));
        assert_eq!(email_validation_class("user.name@mail.example.com"), Some("is-valid"));
    }

    #[test]
    fn invalid_email_gets_invalid_class() {
        assert_eq!(email_validation_class("not-an-email"), Some("is-invalid"));
        assert_eq!(email_validation_class("a@b"), Some("is-invalid"));
        assert_eq!(email_validation_class("a@@b.co"), Some("is-invalid"));
        assert_eq!(email_validation_class("a b@c.do"), Some("is-invalid"));
        assert_eq!(email_validation_class("@b.co"), Some("is-invalid"));
        assert_eq!(email_validation_class("a@.co"), Some("is-invalid"));
        assert_eq!(email_validation_class("a@b."), Some("is-invalid"));
    }

    #[test]
    fn empty_email_gets_no_class() {
        assert_eq!(email_validation_class(""), None);
    }
}
