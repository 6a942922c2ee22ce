//! Terminal rendering of the popup and wait overlay
//!
//! Draws the same model as the HTML markup, for previews in a terminal.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::diagnostics::DiagnosticSink;
use super::error_popup::ErrorPopupState;
use super::notification_service::NotificationService;
use super::wait_screen::WaitScreenState;
use crate::theme;
use crate::widgets::popup;

const WAIT_LABEL: &str = "Please wait...";
const POPUP_TITLE: &str = " Errors ";
const CLOSE_MARKER: &str = "[x]";
const POPUP_MARGIN: u16 = 2;

/// Widget drawing whatever the service currently shows
pub struct NotificationOverlay<'a> {
    error_popup: &'a ErrorPopupState,
    wait_screen: &'a WaitScreenState,
}

impl<'a> NotificationOverlay<'a> {
    pub fn new<S: DiagnosticSink>(service: &'a NotificationService<S>) -> Self {
        Self {
            error_popup: service.error_popup(),
            wait_screen: service.wait_screen(),
        }
    }
}

impl Widget for NotificationOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Popup goes last so it stays on top of the overlay
        if self.wait_screen.is_visible() {
            render_wait_screen(area, buf);
        }
        if self.error_popup.is_visible() {
            render_error_popup(self.error_popup, area, buf);
        }
    }
}

/// Render the notifications over the whole frame
///
/// Call after rendering the main UI so they appear on top.
pub fn render_notifications<S: DiagnosticSink>(frame: &mut Frame, service: &NotificationService<S>) {
    let area = frame.area();
    frame.render_widget(NotificationOverlay::new(service), area);
}

/// Plain text rows of a rendered buffer, trailing blanks removed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

fn render_wait_screen(area: Rect, buf: &mut Buffer) {
    let width = WAIT_LABEL.len() as u16 + 4; // 1 padding + 1 border on each side
    let wait_area = popup::centered_popup(area, width, 3);

    if wait_area.width < 5 || wait_area.height < 3 {
        return;
    }

    popup::clear_area(buf, wait_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::wait_screen::BORDER))
        .style(Style::default().bg(theme::wait_screen::BG));

    let text = Line::from(Span::styled(
        format!(" {} ", WAIT_LABEL),
        theme::wait_screen::TEXT,
    ));

    Paragraph::new(text).block(block).render(wait_area, buf);
}

fn render_error_popup(error_popup: &ErrorPopupState, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = error_popup
        .blocks()
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!(" Code {}:", entry.code), theme::error_popup::CODE),
                Span::styled(format!(" {} ", entry.message), theme::error_popup::MESSAGE),
            ])
        })
        .collect();

    let title_width = POPUP_TITLE.len() + CLOSE_MARKER.len();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    // Borders add one cell on each side
    let width = clamp_to_u16(content_width.max(title_width)).saturating_add(2);
    let height = clamp_to_u16(lines.len().max(1)).saturating_add(2);

    let popup_area = popup::top_right_popup(area, width, height, POPUP_MARGIN);

    if popup_area.width < 5 || popup_area.height < 3 {
        return;
    }

    popup::clear_area(buf, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::error_popup::BORDER))
        .style(Style::default().bg(theme::error_popup::BG))
        .title(Line::from(POPUP_TITLE).style(theme::error_popup::TITLE))
        .title_top(
            Line::from(CLOSE_MARKER)
                .style(theme::error_popup::CLOSE_HINT)
                .alignment(Alignment::Right),
        );

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

fn clamp_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "terminal_render_tests.rs"]
mod terminal_render_tests;
