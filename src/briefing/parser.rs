//! Splitting a summary block into individual briefs.

/// Section separator emitted by the summarizer: a 50-hyphen line.
pub const BRIEF_DELIMITER: &str =
    "--------------------------------------------------";

/// A section shorter than this is noise, not a brief.
const MIN_BRIEF_CHARS: usize = 100;

/// Marker substrings a real brief section carries.
const BRIEF_MARKERS: [&str; 2] = ["1. *Synopsis*", "*Brief Title*"];

/// Split a summary into brief sections.
///
/// Sections are delimiter-separated; a section qualifies when, after
/// trimming, it exceeds the length floor and contains one of the brief
/// markers. Everything else is dropped silently.
pub fn parse_briefs(summary: &str) -> Vec<String> {
    summary
        .split(BRIEF_DELIMITER)
        .map(str::trim)
        .filter(|section| {
            section.chars().count() > MIN_BRIEF_CHARS
                && BRIEF_MARKERS.iter().any(|marker| section.contains(marker))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_brief(marker: &str, topic: &str) -> String {
        format!(
            "{}\n{} is drawing heavy coverage this week, with volumes well above \
             the trailing average and several large funds disclosing new positions.",
            marker, topic
        )
    }

    #[test]
    fn test_keeps_only_qualifying_sections() {
        let summary = format!(
            "{}\n{}\n{}\n{}\n{}",
            long_brief("*Brief Title* Lithium", "Lithium"),
            BRIEF_DELIMITER,
            long_brief("*Brief Title* Uranium", "Uranium"),
            BRIEF_DELIMITER,
            "This section is far too short to qualify" // 40 chars, no marker
        );
        let briefs = parse_briefs(&summary);
        assert_eq!(briefs.len(), 2);
        assert!(briefs[0].contains("Lithium"));
        assert!(briefs[1].contains("Uranium"));
    }

    #[test]
    fn test_synopsis_marker_qualifies() {
        let summary = long_brief("1. *Synopsis*", "Copper");
        assert_eq!(parse_briefs(&summary).len(), 1);
    }

    #[test]
    fn test_long_section_without_marker_dropped() {
        let section = "x".repeat(300);
        assert!(parse_briefs(&section).is_empty());
    }

    #[test]
    fn test_marked_section_below_length_floor_dropped() {
        let summary = "*Brief Title* tiny";
        assert!(parse_briefs(summary).is_empty());
    }

    #[test]
    fn test_empty_summary() {
        assert!(parse_briefs("").is_empty());
    }

    #[test]
    fn test_sections_are_trimmed() {
        let summary = format!("\n\n  {}  \n\n", long_brief("*Brief Title* Gold", "Gold"));
        let briefs = parse_briefs(&summary);
        assert!(briefs[0].starts_with("*Brief Title*"));
    }
}
