//! Static rule tables consumed by the safety filter.

use serde::{Deserialize, Serialize};

/// PII category recognized by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    /// Email addresses.
    Email,
    /// Phone numbers, local and generic long-digit forms.
    Phone,
    /// Street-address-like phrases.
    Address,
}

impl PiiKind {
    /// Replacement marker inserted for redacted spans of this category.
    ///
    /// Markers must never match any PII pattern themselves so that
    /// re-filtering already-filtered text is a no-op.
    pub fn marker(self) -> &'static str {
        match self {
            PiiKind::Email => "[EMAIL_REMOVED]",
            PiiKind::Phone => "[PHONE_REMOVED]",
            PiiKind::Address => "[ADDRESS_REMOVED]",
        }
    }
}

/// One independent PII pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiRule {
    /// Category the pattern detects.
    pub kind: PiiKind,
    /// Regular expression source for the pattern.
    pub pattern: String,
}

impl PiiRule {
    /// Convenience constructor for a rule.
    pub fn new(kind: PiiKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }
}

/// Rule tables compiled into a [`SafetyFilter`](crate::SafetyFilter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyRules {
    /// Blocklisted terms, matched case-insensitively as substrings. A match
    /// rejects the message outright.
    #[serde(default)]
    pub blocklist: Vec<String>,
    /// Independent PII patterns; every rule is applied to every input.
    #[serde(default)]
    pub pii_rules: Vec<PiiRule>,
}

impl Default for SafetyRules {
    /// Production rule table shipped with the companion (English + Slovak).
    fn default() -> Self {
        let blocklist = [
            "idiot",
            "stupid",
            "moron",
            "shut up",
            "jerk",
            "damn",
            "crap",
            "hate you",
            "blbec",
            "debil",
            "hlupák",
            "hlupak",
            "sprostý",
            "sprosty",
            "kretén",
            "kreten",
            "drž hubu",
            "drz hubu",
            "nenávidím ťa",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let pii_rules = vec![
            PiiRule::new(
                PiiKind::Email,
                r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            ),
            // Slovak numbers with international prefix or local mobile form.
            PiiRule::new(PiiKind::Phone, r"(\+421|00421)\s?\d{3}\s?\d{3}\s?\d{3}"),
            PiiRule::new(PiiKind::Phone, r"\b09\d{2}\s?\d{3}\s?\d{3}\b"),
            // Generic long digit runs that look like a phone number.
            PiiRule::new(PiiKind::Phone, r"\b\d{9,12}\b"),
            PiiRule::new(
                PiiKind::Address,
                r"(?i)\b\d{1,4}\s+[a-zà-ž]+\s+(street|avenue|road|lane|drive)\b",
            ),
            PiiRule::new(
                PiiKind::Address,
                r"(?i)\b(ulica|ul\.|cesta|námestie|nám\.)\s+[a-zà-ž]+(\s+\d{1,4})?",
            ),
        ];

        Self {
            blocklist,
            pii_rules,
        }
    }
}
