//! Notification module
//!
//! Error popup and reference-counted wait screen. Callers push state into a
//! [`NotificationService`]; the markup and terminal renderers are projections
//! of that state.

pub mod diagnostics;
mod error_popup;
pub mod markup;
mod notification_service;
pub mod terminal_render;
mod wait_screen;

pub use diagnostics::{DiagnosticSink, LogSink, RecordingSink};
pub use error_popup::{ErrorEntry, ErrorPopupState};
pub use notification_service::{NotificationService, NotificationSnapshot, PRINT_ERRORS_CALLER};
pub use wait_screen::{OverlayState, WaitScreenState};
