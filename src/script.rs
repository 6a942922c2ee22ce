//! Session scripts
//!
//! A script is a JSON array of operations replayed in order against a
//! [`NotificationService`]:
//!
//! ```json
//! [
//!   {"op": "showWaitScreen", "caller": "loadBasket"},
//!   {"op": "throwError", "code": 404, "message": "Not found"},
//!   {"op": "hideWaitScreen", "caller": "loadBasket", "forceClose": false},
//!   {"op": "dismissErrorPopup"}
//! ]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::NotifyError;
use crate::notification::{DiagnosticSink, ErrorEntry, NotificationService};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    ThrowError {
        code: i64,
        message: String,
    },
    PrintErrors {
        #[serde(default)]
        errors: Vec<ErrorEntry>,
    },
    ShowWaitScreen {
        #[serde(default)]
        caller: Option<String>,
    },
    HideWaitScreen {
        #[serde(default)]
        caller: Option<String>,
        #[serde(default, rename = "forceClose")]
        force_close: bool,
    },
    DismissErrorPopup,
}

impl Operation {
    /// Run the operation. Wait screen operations return the counter value.
    pub fn apply<S: DiagnosticSink>(&self, service: &mut NotificationService<S>) -> Option<i64> {
        match self {
            Operation::ThrowError { code, message } => {
                service.throw_error(*code, message);
                None
            }
            Operation::PrintErrors { errors } => {
                service.print_errors(errors);
                None
            }
            Operation::ShowWaitScreen { caller } => {
                Some(service.show_wait_screen(caller.as_deref()))
            }
            Operation::HideWaitScreen {
                caller,
                force_close,
            } => Some(service.hide_wait_screen(caller.as_deref(), *force_close)),
            Operation::DismissErrorPopup => {
                service.dismiss_error_popup();
                None
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ThrowError { code, message } => {
                write!(f, "throwError({}, {:?})", code, message)
            }
            Operation::PrintErrors { errors } => write!(f, "printErrors({} errors)", errors.len()),
            Operation::ShowWaitScreen { caller } => write!(f, "showWaitScreen({:?})", caller),
            Operation::HideWaitScreen {
                caller,
                force_close,
            } => write!(f, "hideWaitScreen({:?}, {})", caller, force_close),
            Operation::DismissErrorPopup => write!(f, "dismissErrorPopup()"),
        }
    }
}

pub fn parse_script(contents: &str) -> Result<Vec<Operation>, NotifyError> {
    serde_json::from_str(contents).map_err(|e| NotifyError::InvalidScript(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<Operation>, NotifyError> {
    #[cfg(debug_assertions)]
    log::debug!("Loading script from {:?}", path);

    let contents = fs::read_to_string(path).map_err(|source| NotifyError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents)
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod script_tests;
