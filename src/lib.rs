//! storefront-notify library - error popup and wait screen for storefront UIs
//!
//! The [`NotificationService`] owns all state; the markup and terminal
//! renderers only project it.

pub mod config;
pub mod error;
pub mod notification;
pub mod script;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use config::Config;
pub use notification::{ErrorEntry, NotificationService};
