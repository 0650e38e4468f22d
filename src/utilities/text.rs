//! Text helpers shared by the prompt compiler and the moderation parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode dash family (hyphen through horizontal bar, plus minus sign).
/// Analysis models like to emit these in place of ASCII hyphens, which
/// breaks downstream substring checks.
static DASHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{2212}]")
        .expect("dash pattern is valid")
});

/// Replace every unicode dash with an ASCII hyphen.
pub fn normalize_dashes(text: &str) -> String {
    DASHES.replace_all(text, "-").into_owned()
}

/// Render a labeled bullet line, or nothing when the value is blank after
/// trimming.
pub fn bullet_line(label: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("- {}: {}", label, trimmed))
    }
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dashes() {
        assert_eq!(normalize_dashes("em\u{2014}dash en\u{2013}dash"), "em-dash en-dash");
        assert_eq!(normalize_dashes("plain-hyphen"), "plain-hyphen");
        assert_eq!(normalize_dashes(""), "");
    }

    #[test]
    fn test_bullet_line_skips_blank_values() {
        assert_eq!(
            bullet_line("Campaign hook", "Buy gold"),
            Some("- Campaign hook: Buy gold".to_string())
        );
        assert_eq!(bullet_line("Campaign hook", "   "), None);
        assert_eq!(bullet_line("Campaign hook", ""), None);
    }

    #[test]
    fn test_bullet_line_trims_value() {
        assert_eq!(
            bullet_line("Details", "  act now  "),
            Some("- Details: act now".to_string())
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }
}
