//! Wait screen reference counting
//!
//! Every acquire bumps the counter and records its caller; every release
//! drops the counter and forgets the most recent matching caller. The overlay
//! is shown while the counter is positive.

use serde::Serialize;

/// State of the overlay element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayState {
    /// Never created
    #[default]
    Absent,
    Hidden,
    Visible,
}

#[derive(Debug, Default)]
pub struct WaitScreenState {
    count: i64,
    callers: Vec<String>,
    overlay: OverlayState,
}

impl WaitScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value. Only negative between the decrement of an
    /// unmatched release and its clamp, so never observable from outside.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Callers holding the wait screen, oldest first
    pub fn callers(&self) -> &[String] {
        &self.callers
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn is_visible(&self) -> bool {
        self.overlay == OverlayState::Visible
    }

    pub(super) fn acquire(&mut self, caller: Option<&str>) -> i64 {
        if let Some(caller) = caller {
            self.callers.push(caller.to_string());
        }
        self.overlay = OverlayState::Visible;
        self.count += 1;
        self.count
    }

    pub(super) fn release(&mut self, caller: Option<&str>, force_close: bool) -> i64 {
        self.count -= 1;

        if let Some(caller) = caller
            && let Some(index) = self.callers.iter().rposition(|held| held == caller)
        {
            self.callers.remove(index);
        }

        if self.count <= 0 || force_close {
            self.count = 0;
            if self.overlay == OverlayState::Visible {
                self.overlay = OverlayState::Hidden;
            }
        }
        self.count
    }
}

#[cfg(test)]
#[path = "wait_screen_tests.rs"]
mod wait_screen_tests;
