//! Result types produced by the safety filter.

use serde::{Deserialize, Serialize};

/// Classification of a safety finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// A blocklisted term was found; the message must not be forwarded.
    Profanity,
    /// Personal data was found and redacted; the filtered text may still be
    /// forwarded.
    PiiDetected,
}

/// Outcome of one safety check. Produced fresh per input, never mutated.
///
/// `blocked` and `safe` are deliberately independent: a redacted message has
/// `safe == false` but `blocked == false`, and the caller forwards the
/// `filtered` text instead of rejecting the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCheckResult {
    /// Whether the input passed without any finding.
    pub safe: bool,
    /// Whether the message must be rejected outright.
    pub blocked: bool,
    /// Text to forward to the model when the message is not blocked.
    pub filtered: String,
    /// Classification of the finding, if any.
    pub reason: Option<BlockReason>,
}
