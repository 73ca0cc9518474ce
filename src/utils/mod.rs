// Utils compartidos

pub mod bootstrap_ffi;
pub mod clipboard;
pub mod constants;
pub mod format;

pub use constants::*;
