// ============================================================================
// SCHEDULER - Jobs periódicos cancelables por clave
// ============================================================================
// Los timers del navegador no tienen handle propio una vez olvidados; acá
// cada job periódico queda registrado bajo una clave y se libera en el
// teardown de la página. Registrar una clave existente reemplaza el job
// anterior (el Drop del Interval cancela el timer).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Registro de jobs periódicos de la página
#[derive(Clone)]
pub struct Scheduler {
    jobs: Rc<RefCell<HashMap<&'static str, Interval>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            jobs: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Registrar un job periódico bajo una clave; reemplaza el anterior si existe
    pub fn every<F>(&self, key: &'static str, interval_ms: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        let interval = Interval::new(interval_ms, callback);
        if self.jobs.borrow_mut().insert(key, interval).is_some() {
            log::warn!("⏲️ Job '{}' ya estaba registrado, reemplazando", key);
        }
    }

    /// Cancelar un job por clave
    pub fn cancel(&self, key: &str) -> bool {
        self.jobs.borrow_mut().remove(key).is_some()
    }

    /// Cancelar todos los jobs (teardown de la página)
    pub fn cancel_all(&self) {
        let count = self.jobs.borrow().len();
        self.jobs.borrow_mut().clear();
        if count > 0 {
            log::info!("🔌 Scheduler: {} jobs liberados", count);
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
