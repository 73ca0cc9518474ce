// ============================================================================
// VIEWS - Comportamientos de página sobre el DOM renderizado por el servidor
// ============================================================================

pub mod dashboard;
pub mod forms;
pub mod leads;
pub mod notifications;
pub mod tables;
pub mod toast;
pub mod widgets;

pub use dashboard::*;
pub use forms::*;
pub use leads::*;
pub use notifications::*;
pub use tables::*;
pub use toast::*;
pub use widgets::*;
