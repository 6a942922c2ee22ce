//! Notification service
//!
//! Owns the error popup and the wait screen. Create one per application and
//! hand it to whatever reports errors or runs asynchronous work.

use serde::Serialize;

use super::diagnostics::{DiagnosticSink, LogSink};
use super::error_popup::{ErrorEntry, ErrorPopupState};
use super::wait_screen::{OverlayState, WaitScreenState};

/// Caller id used when reported errors cancel the wait screen
pub const PRINT_ERRORS_CALLER: &str = "printErrors";

pub(crate) const MISSING_CALLER_WARNING: &str = "Missing caller identifier for wait screen";

/// Serializable view of everything the service currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSnapshot {
    pub wait_screen_count: i64,
    pub wait_screen_callers: Vec<String>,
    pub overlay: OverlayState,
    pub error_popup_created: bool,
    pub error_popup_visible: bool,
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug)]
pub struct NotificationService<S: DiagnosticSink = LogSink> {
    error_popup: ErrorPopupState,
    wait_screen: WaitScreenState,
    sink: S,
}

impl NotificationService {
    /// Service reporting warnings through the `log` facade
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> NotificationService<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            error_popup: ErrorPopupState::new(),
            wait_screen: WaitScreenState::new(),
            sink,
        }
    }

    /// Report a single error
    pub fn throw_error(&mut self, code: i64, message: &str) {
        self.print_errors(&[ErrorEntry::new(code, message)]);
    }

    /// Show a batch of errors in the popup
    ///
    /// While the popup is open, codes it already shows are skipped and new
    /// ones are appended. A hidden popup has its content replaced and is
    /// shown again. Either way the wait screen is force-closed afterwards.
    pub fn print_errors(&mut self, errors: &[ErrorEntry]) {
        if self.error_popup.ensure_created() {
            #[cfg(debug_assertions)]
            log::debug!("Created error popup");
        }

        let was_visible = self.error_popup.is_visible();
        let pending: Vec<ErrorEntry> = errors
            .iter()
            .filter(|entry| !was_visible || !self.error_popup.is_displaying(entry.code))
            .cloned()
            .collect();

        #[cfg(debug_assertions)]
        log::debug!(
            "Rendering {} of {} reported errors (popup visible: {})",
            pending.len(),
            errors.len(),
            was_visible
        );

        if was_visible {
            self.error_popup.append(pending);
        } else {
            self.error_popup.replace_and_show(pending);
        }

        self.hide_wait_screen(Some(PRINT_ERRORS_CALLER), true);
    }

    /// Acquire one wait screen reference. Returns the new counter value.
    pub fn show_wait_screen(&mut self, caller: Option<&str>) -> i64 {
        let caller = caller_id(caller);
        if caller.is_none() {
            self.sink.warn(MISSING_CALLER_WARNING);
        }

        let count = self.wait_screen.acquire(caller);

        #[cfg(debug_assertions)]
        log::debug!("Wait screen acquired by {:?}, count {}", caller, count);

        count
    }

    /// Release one wait screen reference. Returns the resulting counter value.
    ///
    /// With `force_close` the overlay is hidden and the counter reset to zero
    /// no matter how many references are still held.
    pub fn hide_wait_screen(&mut self, caller: Option<&str>, force_close: bool) -> i64 {
        let caller = caller_id(caller);
        if caller.is_none() {
            self.sink.warn(MISSING_CALLER_WARNING);
        }

        let count = self.wait_screen.release(caller, force_close);

        #[cfg(debug_assertions)]
        log::debug!(
            "Wait screen released by {:?} (force: {}), count {}",
            caller,
            force_close,
            count
        );

        count
    }

    /// Activate the popup's close button
    pub fn dismiss_error_popup(&mut self) {
        self.error_popup.dismiss();
    }

    pub fn error_popup(&self) -> &ErrorPopupState {
        &self.error_popup
    }

    pub fn wait_screen(&self) -> &WaitScreenState {
        &self.wait_screen
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> NotificationSnapshot {
        NotificationSnapshot {
            wait_screen_count: self.wait_screen.count(),
            wait_screen_callers: self.wait_screen.callers().to_vec(),
            overlay: self.wait_screen.overlay(),
            error_popup_created: self.error_popup.is_created(),
            error_popup_visible: self.error_popup.is_visible(),
            errors: self.error_popup.blocks().to_vec(),
        }
    }

    /// Drop all popup and wait screen state, keeping the sink
    pub fn reset(&mut self) {
        self.error_popup = ErrorPopupState::new();
        self.wait_screen = WaitScreenState::new();
    }

    /// Tear the service down, returning callers that never released the
    /// wait screen.
    pub fn shutdown(self) -> Vec<String> {
        let outstanding = self.wait_screen.callers().to_vec();
        if !outstanding.is_empty() {
            log::warn!(
                "Wait screen still held at shutdown by: {}",
                outstanding.join(", ")
            );
        }
        outstanding
    }
}

/// Empty caller ids count as missing
fn caller_id(caller: Option<&str>) -> Option<&str> {
    caller.filter(|caller| !caller.is_empty())
}

#[cfg(test)]
#[path = "notification_service_tests.rs"]
mod notification_service_tests;
