use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to read script {}: {source}", .path.display())]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    InvalidScript(String),
}
