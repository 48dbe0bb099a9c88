//! Chat-submission flow: what a host forwards for each filter outcome.

use pretty_assertions::assert_eq;
use starlink_heart::safety::{BlockReason, Locale, SafetyFilter, user_message};

/// What the host sends to the AI backend after filtering, if anything.
fn forwarded_text(filter: &SafetyFilter, input: &str) -> Option<String> {
    let result = filter.check(input);
    if result.blocked {
        return None;
    }
    // Redacted turns are still forwarded, with the filtered text.
    Some(result.filtered)
}

#[test]
fn blocked_turns_are_rejected_with_a_companion_message() {
    let filter = SafetyFilter::new().expect("compile");
    let result = filter.check("ty si debil");
    assert_eq!(result.blocked, true);
    assert_eq!(forwarded_text(&filter, "ty si debil"), None);
    let message = user_message(result.reason, Locale::Sk);
    assert!(!message.is_empty());
}

#[test]
fn redacted_turns_forward_the_filtered_text() {
    let filter = SafetyFilter::new().expect("compile");
    let forwarded = forwarded_text(&filter, "volaj mi na 0903 123 456").expect("forwarded");
    assert!(forwarded.contains("[PHONE_REMOVED]"));
    assert!(!forwarded.contains("0903"));

    let result = filter.check("volaj mi na 0903 123 456");
    assert_eq!(result.safe, false);
    assert_eq!(result.reason, Some(BlockReason::PiiDetected));
}

#[test]
fn clean_turns_forward_the_original_text() {
    let filter = SafetyFilter::new().expect("compile");
    assert_eq!(
        forwarded_text(&filter, "nakresli mi hviezdu"),
        Some("nakresli mi hviezdu".to_string())
    );
}
