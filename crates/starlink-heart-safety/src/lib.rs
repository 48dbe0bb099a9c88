//! Content-safety filtering for the Starlink Heart companion.
//!
//! User input is classified synchronously before any text reaches the AI
//! backend: blocklisted terms reject the message outright, personal data is
//! redacted in place. Checks are pure and never fail; only rule compilation
//! can return an error.

pub mod error;
pub mod filter;
pub mod messages;
pub mod model;
pub mod rules;

/// Safety error type.
pub use error::SafetyError;
/// Compiled safety filter.
pub use filter::SafetyFilter;
/// Companion messages for filter outcomes.
pub use messages::{Locale, user_message};
/// Filter result types.
pub use model::{BlockReason, SafetyCheckResult};
/// Rule tables and PII categories.
pub use rules::{PiiKind, PiiRule, SafetyRules};
