//! Companion-voiced messages shown to the child for each filter outcome.

use crate::model::BlockReason;

/// Message language for companion replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Slovak, the product default.
    #[default]
    Sk,
    /// English.
    En,
}

/// Fixed user-facing message for a filter outcome.
///
/// Unknown or missing reasons fall back to a generic prompt instead of
/// failing.
pub fn user_message(reason: Option<BlockReason>, locale: Locale) -> &'static str {
    match (locale, reason) {
        (Locale::Sk, Some(BlockReason::Profanity)) => {
            "Prepáč, takéto slová u nás nepoužívame. Skús to povedať krajšie."
        }
        (Locale::Sk, Some(BlockReason::PiiDetected)) => {
            "Psst, osobné údaje si nechaj v tajnosti. Tvoju správu som trošku upravil."
        }
        (Locale::Sk, None) => "Skús mi to napísať ešte raz, trochu inak.",
        (Locale::En, Some(BlockReason::Profanity)) => {
            "Oops, we don't use words like that here. Try saying it another way."
        }
        (Locale::En, Some(BlockReason::PiiDetected)) => {
            "Psst, keep personal details secret! I tidied up your message a little."
        }
        (Locale::En, None) => "Could you try writing that a different way?",
    }
}
