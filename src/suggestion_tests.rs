//! Tests for Suggestion value type

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_effective_group_defaults_when_missing() {
    let suggestion = Suggestion::text("cat");
    assert_eq!(suggestion.effective_group(), DEFAULT_GROUP_NAME);
}

#[test]
fn test_effective_group_defaults_when_blank() {
    let suggestion = Suggestion::text("cat").with_group("   ");
    assert_eq!(suggestion.effective_group(), DEFAULT_GROUP_NAME);
}

#[test]
fn test_effective_group_is_trimmed() {
    let suggestion = Suggestion::text("cat").with_group(" Web ");
    assert_eq!(suggestion.effective_group(), "Web");
}

#[test]
fn test_is_link() {
    assert!(!Suggestion::text("cat").is_link());
    assert!(Suggestion::text("cat").with_target_url("https://x").is_link());
}

#[test]
fn test_plain_text_strips_markup() {
    let suggestion = Suggestion::text("<B>ca</B>talog");
    assert_eq!(suggestion.plain_text(), "catalog");
}

#[test]
fn test_person_secondary_text_joins_fields() {
    let suggestion = Suggestion::person(
        "Ada Lovelace",
        Some("Analyst".to_string()),
        Some("ada@example.com".to_string()),
    );
    assert_eq!(
        suggestion.secondary_text().as_deref(),
        Some("Analyst | ada@example.com")
    );
}

#[test]
fn test_person_secondary_text_single_field() {
    let suggestion = Suggestion::person("Ada", None, Some("ada@example.com".to_string()));
    assert_eq!(suggestion.secondary_text().as_deref(), Some("ada@example.com"));

    let bare = Suggestion::person("Ada", None, Some(String::new()));
    assert!(bare.secondary_text().is_none());
}

#[test]
fn test_text_has_no_secondary_text() {
    assert!(Suggestion::text("cat").secondary_text().is_none());
}

#[test]
fn test_selection_handler_is_invoked_with_suggestion() {
    let calls = std::sync::Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let handler = SelectionHandler::new(move |s| {
        assert_eq!(s.display_text, "cat");
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let suggestion = Suggestion::text("cat").with_handler(handler.clone());

    handler.call(&suggestion).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_selection_handler_error_display() {
    let err = SelectionHandlerError("boom".to_string());
    assert_eq!(err.to_string(), "Selection handler failed: boom");
}

#[test]
fn test_same_link_as() {
    let a = Suggestion::text("Docs").with_target_url("https://x");
    let same = Suggestion::text("Docs").with_target_url("https://x");
    let other = Suggestion::text("Wiki").with_target_url("https://y");
    assert!(a.same_link_as(&same));
    assert!(!a.same_link_as(&other));
}
