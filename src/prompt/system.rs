//! System-level directive: voice, locale, formatting, compliance.
//!
//! Kept apart from the per-campaign user prompt so compliance and voice
//! rules hold regardless of what a brief asks for.

use crate::prompt::locale::Market;

/// Compliance constraint carried on every generation.
pub const COMPLIANCE_RULE: &str =
    "Never promise, guarantee, or imply assured returns. Frame all outcomes \
     as potential, with risk acknowledged.";

/// Closing sentence the model must append, verbatim, to every piece of copy.
pub const CLOSING_DISCLAIMER: &str =
    "All investing involves risk, and past performance is no guarantee of future results.";

/// Build the system directive for a market.
pub fn system_directive(market: Market) -> String {
    format!(
        "You are a direct-response Copy Chief for a financial publisher. You \
         write persuasive, plain-spoken marketing copy that respects the \
         reader's intelligence.\n\
         {}\n\
         Formatting: markdown, short paragraphs, no emoji, headings only \
         where the structure calls for them.\n\
         {}\n\
         End every piece of copy with this sentence, verbatim: \"{}\"",
        market.directive(),
        COMPLIANCE_RULE,
        CLOSING_DISCLAIMER,
    )
}
