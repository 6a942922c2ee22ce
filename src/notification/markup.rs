//! HTML rendering of the popup and wait overlay
//!
//! Ids, classes and attributes match what the storefront stylesheets target,
//! so they must not change.

use super::diagnostics::DiagnosticSink;
use super::error_popup::{ErrorEntry, ErrorPopupState};
use super::notification_service::NotificationService;
use super::wait_screen::{OverlayState, WaitScreenState};

pub const ERROR_POPUP_ID: &str = "CheckoutErrorPane";
pub const WAIT_SCREEN_ID: &str = "PlentyWaitScreen";

const CLOSE_BUTTON: &str = r#"<button class="close" type="button"><span aria-hidden="true">×</span><span class="sr-only">Close</span></button>"#;

/// Render a single error block
pub fn render_error_block(entry: &ErrorEntry) -> String {
    format!(
        r#"<div class="plentyErrorBoxContent" data-plenty-error-code="{code}"><span class="PlentyErrorCode">Code {code}:</span><span class="PlentyErrorMsg">{message}</span></div>"#,
        code = entry.code,
        message = escape_html(&entry.message),
    )
}

/// Render the popup, or `None` if it was never created
pub fn render_error_popup(popup: &ErrorPopupState) -> Option<String> {
    if !popup.is_created() {
        return None;
    }

    let style = if popup.is_visible() {
        ""
    } else {
        r#" style="display: none;""#
    };

    let mut html = format!(
        r#"<div class="plentyErrorBox" id="{ERROR_POPUP_ID}"{style}>{CLOSE_BUTTON}<div class="plentyErrorBoxInner">"#
    );
    for block in popup.blocks() {
        html.push_str(&render_error_block(block));
    }
    html.push_str("</div></div>");
    Some(html)
}

/// Render the wait overlay, or `None` if it was never created
pub fn render_wait_screen(wait_screen: &WaitScreenState) -> Option<String> {
    let classes = match wait_screen.overlay() {
        OverlayState::Absent => return None,
        OverlayState::Hidden => "overlay overlay-wait",
        OverlayState::Visible => "overlay overlay-wait in",
    };
    Some(format!(r#"<div id="{WAIT_SCREEN_ID}" class="{classes}"></div>"#))
}

/// Render everything the service has added to the page body
pub fn render_body<S: DiagnosticSink>(service: &NotificationService<S>) -> String {
    let mut body = String::new();
    if let Some(popup) = render_error_popup(service.error_popup()) {
        body.push_str(&popup);
    }
    if let Some(overlay) = render_wait_screen(service.wait_screen()) {
        body.push_str(&overlay);
    }
    body
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
