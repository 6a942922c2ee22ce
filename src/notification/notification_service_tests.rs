//! Tests for notification_service

use super::*;
use crate::notification::diagnostics::RecordingSink;
use proptest::prelude::*;

fn recording_service() -> NotificationService<RecordingSink> {
    NotificationService::with_sink(RecordingSink::new())
}

fn codes<S: DiagnosticSink>(service: &NotificationService<S>) -> Vec<i64> {
    service.error_popup().displayed_codes().collect()
}

// ==================== Wait Screen ====================

#[test]
fn test_two_loads_scenario() {
    let mut service = recording_service();

    assert_eq!(service.show_wait_screen(Some("load1")), 1);
    assert!(service.wait_screen().is_visible());
    assert_eq!(service.show_wait_screen(Some("load2")), 2);
    assert!(service.wait_screen().is_visible());

    assert_eq!(service.hide_wait_screen(Some("load1"), false), 1);
    assert!(service.wait_screen().is_visible());
    assert_eq!(service.hide_wait_screen(Some("load2"), false), 0);
    assert!(!service.wait_screen().is_visible());

    assert!(service.sink().warnings().is_empty());
}

#[test]
fn test_missing_caller_warns_but_proceeds() {
    let mut service = recording_service();

    assert_eq!(service.show_wait_screen(None), 1);
    assert!(service.wait_screen().is_visible());
    assert!(service.wait_screen().callers().is_empty());

    assert_eq!(service.hide_wait_screen(None, false), 0);
    assert!(!service.wait_screen().is_visible());

    assert_eq!(
        service.sink().warnings(),
        [MISSING_CALLER_WARNING, MISSING_CALLER_WARNING]
    );
}

#[test]
fn test_empty_caller_counts_as_missing() {
    let mut service = recording_service();
    service.show_wait_screen(Some(""));

    assert!(service.wait_screen().callers().is_empty());
    assert_eq!(service.sink().warnings().len(), 1);
}

#[test]
fn test_release_removes_last_matching_caller() {
    let mut service = recording_service();
    service.show_wait_screen(Some("A"));
    service.show_wait_screen(Some("B"));
    service.show_wait_screen(Some("A"));

    assert_eq!(service.hide_wait_screen(Some("A"), false), 2);
    assert_eq!(service.wait_screen().callers(), ["A", "B"]);
}

#[test]
fn test_force_close_with_outstanding_references() {
    let mut service = recording_service();
    service.show_wait_screen(Some("A"));
    service.show_wait_screen(Some("B"));

    assert_eq!(service.hide_wait_screen(Some("A"), true), 0);
    assert!(!service.wait_screen().is_visible());

    // A later acquire starts counting from zero again
    assert_eq!(service.show_wait_screen(Some("C")), 1);
}

#[test]
fn test_over_release_self_corrects() {
    let mut service = recording_service();
    service.show_wait_screen(Some("A"));
    service.hide_wait_screen(Some("A"), false);

    assert_eq!(service.hide_wait_screen(Some("A"), false), 0);
    assert_eq!(service.show_wait_screen(Some("A")), 1);
    assert!(service.wait_screen().is_visible());
}

// ==================== Error Popup ====================

#[test]
fn test_throw_error_creates_popup() {
    let mut service = recording_service();
    service.show_wait_screen(Some("checkout"));

    service.throw_error(404, "Not found");

    let popup = service.error_popup();
    assert!(popup.is_created());
    assert!(popup.is_visible());
    assert_eq!(popup.blocks(), [ErrorEntry::new(404, "Not found")]);

    // Errors cancel the wait screen
    assert_eq!(service.wait_screen().count(), 0);
    assert!(!service.wait_screen().is_visible());
}

#[test]
fn test_duplicate_code_while_visible_renders_once() {
    let mut service = recording_service();
    service.throw_error(404, "Not found");
    service.throw_error(404, "Not found");

    assert_eq!(codes(&service), vec![404]);
}

#[test]
fn test_visible_popup_appends_new_codes() {
    let mut service = recording_service();
    service.throw_error(1, "first");
    service.print_errors(&[ErrorEntry::new(1, "again"), ErrorEntry::new(2, "second")]);

    assert_eq!(codes(&service), vec![1, 2]);
    assert_eq!(service.error_popup().blocks()[0].message, "first");
}

#[test]
fn test_duplicates_within_one_batch_are_kept() {
    let mut service = recording_service();
    service.print_errors(&[ErrorEntry::new(9, "one"), ErrorEntry::new(9, "two")]);

    assert_eq!(codes(&service), vec![9, 9]);
}

#[test]
fn test_duplicates_within_batch_on_visible_popup_are_kept() {
    let mut service = recording_service();
    service.throw_error(1, "first");
    service.print_errors(&[ErrorEntry::new(2, "a"), ErrorEntry::new(2, "b")]);

    assert_eq!(codes(&service), vec![1, 2, 2]);
}

#[test]
fn test_dismissed_popup_renders_code_again() {
    let mut service = recording_service();
    service.throw_error(404, "Not found");
    service.throw_error(500, "Server error");
    service.dismiss_error_popup();
    assert!(!service.error_popup().is_visible());

    service.throw_error(404, "Not found");

    assert!(service.error_popup().is_visible());
    assert_eq!(codes(&service), vec![404]);
}

#[test]
fn test_empty_batch_still_shows_popup_and_closes_wait_screen() {
    let mut service = recording_service();
    service.show_wait_screen(Some("load"));

    service.print_errors(&[]);

    assert!(service.error_popup().is_created());
    assert!(service.error_popup().is_visible());
    assert!(service.error_popup().blocks().is_empty());
    assert!(!service.wait_screen().is_visible());
    assert_eq!(service.wait_screen().count(), 0);
}

#[test]
fn test_print_errors_forgets_its_own_caller_only() {
    let mut service = recording_service();
    service.show_wait_screen(Some("load"));
    service.show_wait_screen(Some(PRINT_ERRORS_CALLER));

    service.throw_error(1, "boom");

    assert_eq!(service.wait_screen().callers(), ["load"]);
    assert!(service.sink().warnings().is_empty());
}

// ==================== Lifecycle ====================

#[test]
fn test_snapshot_reflects_state() {
    let mut service = recording_service();
    service.show_wait_screen(Some("load"));

    let snapshot = service.snapshot();
    assert_eq!(snapshot.wait_screen_count, 1);
    assert_eq!(snapshot.wait_screen_callers, vec!["load".to_string()]);
    assert_eq!(snapshot.overlay, OverlayState::Visible);
    assert!(!snapshot.error_popup_created);
    assert!(snapshot.errors.is_empty());
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let mut service = recording_service();
    service.throw_error(404, "Not found");

    let json = serde_json::to_value(service.snapshot()).unwrap();
    assert_eq!(json["waitScreenCount"], 0);
    assert_eq!(json["overlay"], "absent");
    assert_eq!(json["errorPopupVisible"], true);
    assert_eq!(json["errors"][0]["code"], 404);
}

#[test]
fn test_reset_keeps_sink() {
    let mut service = recording_service();
    service.show_wait_screen(None);
    service.throw_error(1, "boom");

    service.reset();

    assert!(!service.error_popup().is_created());
    assert_eq!(service.wait_screen().overlay(), OverlayState::Absent);
    assert_eq!(service.sink().warnings().len(), 1);
}

#[test]
fn test_shutdown_reports_outstanding_callers() {
    let mut service = recording_service();
    service.show_wait_screen(Some("load1"));
    service.show_wait_screen(Some("load2"));
    service.hide_wait_screen(Some("load1"), false);

    assert_eq!(service.shutdown(), vec!["load2".to_string()]);
}

#[test]
fn test_default_service_uses_log_sink() {
    let mut service: NotificationService = NotificationService::default();
    assert_eq!(service.show_wait_screen(None), 1);
    assert!(service.shutdown().is_empty());
}

// ==================== Property-Based Tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reporting a code that is already on screen never adds a second block.
    #[test]
    fn prop_visible_popup_never_duplicates_rendered_codes(
        first in prop::collection::vec(0i64..20, 1..8),
        second in prop::collection::vec(0i64..20, 0..8),
    ) {
        let mut service = recording_service();
        let entries = |codes: &[i64]| -> Vec<ErrorEntry> {
            codes.iter().map(|code| ErrorEntry::new(*code, "msg")).collect()
        };

        service.print_errors(&entries(&first[..]));
        let before = codes(&service);
        service.print_errors(&entries(&second[..]));
        let after = codes(&service);

        prop_assert_eq!(&after[..before.len()], &before[..]);
        for code in &after[before.len()..] {
            prop_assert!(!before.contains(code));
        }
    }

    /// Any error report leaves the wait screen closed.
    #[test]
    fn prop_errors_always_close_wait_screen(acquires in 0usize..10, code in any::<i64>()) {
        let mut service = recording_service();
        for i in 0..acquires {
            service.show_wait_screen(Some(&format!("load{}", i)));
        }

        service.throw_error(code, "failure");

        prop_assert_eq!(service.wait_screen().count(), 0);
        prop_assert!(!service.wait_screen().is_visible());
    }
}
