//! Error popup model
//!
//! Holds the blocks currently rendered inside the error popup. The set of
//! displayed codes is always derived from these blocks.

use serde::{Deserialize, Serialize};

/// A single error reported to the popup.
///
/// Missing fields in a deserialized batch fall back to their defaults
/// instead of rejecting the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEntry {
    pub code: i64,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The singleton error popup
///
/// Created lazily by the first reported error and never destroyed afterwards;
/// dismissing it only hides it so it can be reused.
#[derive(Debug, Default)]
pub struct ErrorPopupState {
    created: bool,
    visible: bool,
    blocks: Vec<ErrorEntry>,
}

impl ErrorPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rendered blocks, in display order
    pub fn blocks(&self) -> &[ErrorEntry] {
        &self.blocks
    }

    /// Codes of the rendered blocks, in display order
    pub fn displayed_codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.blocks.iter().map(|block| block.code)
    }

    /// Whether a block tagged with `code` is currently rendered
    pub fn is_displaying(&self, code: i64) -> bool {
        self.displayed_codes().any(|displayed| displayed == code)
    }

    /// Hide the popup, as the close button does. Content is kept until the
    /// next batch replaces it.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Create the popup in its hidden state if it does not exist yet.
    /// Returns true when the popup was created by this call.
    pub(super) fn ensure_created(&mut self) -> bool {
        if self.created {
            return false;
        }
        self.created = true;
        self.visible = false;
        true
    }

    pub(super) fn append(&mut self, blocks: Vec<ErrorEntry>) {
        self.blocks.extend(blocks);
    }

    pub(super) fn replace_and_show(&mut self, blocks: Vec<ErrorEntry>) {
        self.blocks = blocks;
        self.visible = true;
    }
}

#[cfg(test)]
#[path = "error_popup_tests.rs"]
mod error_popup_tests;
