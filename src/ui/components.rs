//! UI Components module - application-specific composite components
//!
//! Components map user interaction to `crate::app::Message`.

pub mod chord_pad;
pub mod error_dialog;
