//! Input safety checks applied before any text reaches the AI backend.

use crate::error::SafetyError;
use crate::model::{BlockReason, SafetyCheckResult};
use crate::rules::{PiiKind, SafetyRules};
use log::debug;
use regex::Regex;

/// Compiled safety filter.
///
/// Build once with [`SafetyFilter::compile`] and reuse for every message.
/// Checks are pure, deterministic, and never fail.
#[derive(Debug)]
pub struct SafetyFilter {
    blocklist: Vec<String>,
    pii: Vec<CompiledPiiRule>,
}

/// One PII rule compiled into a matcher.
#[derive(Debug)]
struct CompiledPiiRule {
    kind: PiiKind,
    regex: Regex,
}

impl SafetyFilter {
    /// Compile the production rule table.
    pub fn new() -> Result<Self, SafetyError> {
        Self::compile(SafetyRules::default())
    }

    /// Compile a rule table into a reusable filter.
    pub fn compile(rules: SafetyRules) -> Result<Self, SafetyError> {
        let blocklist = rules
            .blocklist
            .iter()
            .map(|term| term.to_lowercase())
            .collect();
        let mut pii = Vec::with_capacity(rules.pii_rules.len());
        for rule in &rules.pii_rules {
            let regex = Regex::new(&rule.pattern).map_err(|err| SafetyError::Pattern {
                pattern: rule.pattern.clone(),
                message: err.to_string(),
            })?;
            pii.push(CompiledPiiRule {
                kind: rule.kind,
                regex,
            });
        }
        Ok(Self { blocklist, pii })
    }

    /// Classify a message before it is forwarded to the AI backend.
    ///
    /// A blocklist hit rejects the message outright and leaves the text
    /// unredacted. Personal data is redacted in place; the caller forwards
    /// the `filtered` text even though `safe` is false. Empty or
    /// whitespace-only input is safe unchanged.
    pub fn check(&self, input: &str) -> SafetyCheckResult {
        if input.trim().is_empty() {
            return SafetyCheckResult {
                safe: true,
                blocked: false,
                filtered: input.to_string(),
                reason: None,
            };
        }

        let lowered = input.to_lowercase();
        if let Some(term) = self
            .blocklist
            .iter()
            .find(|term| lowered.contains(term.as_str()))
        {
            // Message content is never logged, only sizes.
            debug!("message blocked (term_len={}, len={})", term.len(), input.len());
            return SafetyCheckResult {
                safe: false,
                blocked: true,
                filtered: input.to_string(),
                reason: Some(BlockReason::Profanity),
            };
        }

        let mut filtered = input.to_string();
        let mut redacted = false;
        // Every rule runs against the full text; categories are not
        // short-circuited after the first hit.
        for rule in &self.pii {
            if rule.regex.is_match(&filtered) {
                filtered = rule
                    .regex
                    .replace_all(&filtered, rule.kind.marker())
                    .to_string();
                redacted = true;
            }
        }
        if redacted {
            debug!("personal data redacted (len={})", filtered.len());
            return SafetyCheckResult {
                safe: false,
                blocked: false,
                filtered,
                reason: Some(BlockReason::PiiDetected),
            };
        }

        SafetyCheckResult {
            safe: true,
            blocked: false,
            filtered: input.to_string(),
            reason: None,
        }
    }
}
