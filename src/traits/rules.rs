//! Score-to-directive derivation and few-shot exemplar selection.

use crate::traits::config::TraitConfig;
use crate::traits::scores::{TraitName, TraitScores};

/// Map a score vector to hard writing directives, in canonical trait order.
///
/// For each scored trait: at or above `high_threshold` emits the high rule,
/// at or below `low_threshold` the low rule, otherwise the mid rule when one
/// exists. Traits absent from the table are skipped silently. Each trait
/// contributes independently, so moving one score never changes another
/// trait's directive.
pub fn derive_directives(scores: &TraitScores, config: &TraitConfig) -> Vec<String> {
    let mut directives = Vec::new();
    for trait_name in TraitName::ALL {
        let Some(score) = scores.get(trait_name) else {
            continue;
        };
        let Some(rule) = config.rule(trait_name) else {
            log::debug!("no rule configured for trait {}, skipping", trait_name);
            continue;
        };
        if score >= rule.high_threshold {
            directives.push(rule.high_rule.clone());
        } else if score <= rule.low_threshold {
            directives.push(rule.low_rule.clone());
        } else if let Some(ref mid) = rule.mid_rule {
            directives.push(mid.clone());
        }
    }
    directives
}

/// Select few-shot exemplar guidance, one line per scored trait, in
/// canonical order.
///
/// The count scales with intensity: three exemplars at score >= 8, two at
/// score >= 4, otherwise one, always taken from the front of the trait's
/// bank. Exemplars illustrate tone; they are never merged into the hard
/// directive list.
pub fn derive_examples(scores: &TraitScores) -> Vec<String> {
    let mut lines = Vec::new();
    for trait_name in TraitName::ALL {
        let Some(score) = scores.get(trait_name) else {
            continue;
        };
        let bank = example_bank(trait_name);
        let selected = &bank[..example_count(score)];
        lines.push(format!("{}: {}", trait_name.label(), selected.join(" | ")));
    }
    lines
}

/// Few-shot count for a score.
fn example_count(score: u8) -> usize {
    if score >= 8 {
        3
    } else if score >= 4 {
        2
    } else {
        1
    }
}

/// Three canonical exemplars per trait, in bank order.
fn example_bank(trait_name: TraitName) -> [&'static str; 3] {
    match trait_name {
        TraitName::Urgency => [
            "\"The window on this closes Friday at midnight.\"",
            "\"Every day you wait, the entry price drifts higher.\"",
            "\"This is the last briefing before the announcement.\"",
        ],
        TraitName::DataRichness => [
            "\"Revenue grew 34% year over year, the third straight beat.\"",
            "\"Since 2019, members following this strategy averaged 11.2% annually.\"",
            "\"Margins widened from 18% to 27% in eight quarters.\"",
        ],
        TraitName::SocialProof => [
            "\"Over 40,000 members already follow this portfolio.\"",
            "\"'I doubled my position after the first report.' - a member since 2016\"",
            "\"Three of the most-read analysts on our desk agree on this one.\"",
        ],
        TraitName::ComparativeFraming => [
            "\"A term deposit pays you 4%. This aims higher - and here's the trade-off.\"",
            "\"The index gets you average. This is built for better than average.\"",
            "\"Doing nothing is also a position. It just pays nothing.\"",
        ],
        TraitName::Imagery => [
            "\"Picture opening your portfolio five years from now and smiling.\"",
            "\"Imagine the quiet hum of dividends landing while you sleep.\"",
            "\"See the chart: a staircase climbing the right side of the page.\"",
        ],
        TraitName::ConversationalTone => [
            "\"Look, nobody times the market. Here's what works instead.\"",
            "\"You've seen headlines like this before, right?\"",
            "\"Let's keep this simple: one idea, one decision.\"",
        ],
        TraitName::Fomo => [
            "\"The members who acted in March are already ahead.\"",
            "\"When this story hits the front page, the easy part is over.\"",
            "\"Most readers will skim past this. A few won't.\"",
        ],
        TraitName::Repetition => [
            "\"Own the toll road. Not the traffic - the toll road.\"",
            "\"Time in the market. That's the whole secret: time in the market.\"",
            "\"One great business. Held for one great decade.\"",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::config::TraitConfig;

    #[test]
    fn test_high_score_emits_high_rule() {
        let config = TraitConfig::embedded();
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Urgency, 9);
        let directives = derive_directives(&scores, config);
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0], config.rule(TraitName::Urgency).unwrap().high_rule);
    }

    #[test]
    fn test_low_score_emits_low_rule() {
        let config = TraitConfig::embedded();
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Fomo, 2);
        let directives = derive_directives(&scores, config);
        assert_eq!(directives, vec![config.rule(TraitName::Fomo).unwrap().low_rule.clone()]);
    }

    #[test]
    fn test_mid_score_without_mid_rule_emits_nothing() {
        let config = TraitConfig::embedded();
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Repetition, 5);
        assert!(derive_directives(&scores, config).is_empty());
    }

    #[test]
    fn test_directives_follow_canonical_order() {
        let config = TraitConfig::embedded();
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Repetition, 9);
        scores.set(TraitName::Urgency, 9);
        let directives = derive_directives(&scores, config);
        assert_eq!(directives[0], config.rule(TraitName::Urgency).unwrap().high_rule);
        assert_eq!(directives[1], config.rule(TraitName::Repetition).unwrap().high_rule);
    }

    #[test]
    fn test_crossing_high_threshold_changes_only_that_trait() {
        let config = TraitConfig::embedded();
        let mut scores = TraitScores::default();

        let rule = config.rule(TraitName::Imagery).unwrap();
        scores.set(TraitName::Imagery, rule.high_threshold - 1);
        let below = derive_directives(&scores, config);
        scores.set(TraitName::Imagery, rule.high_threshold);
        let above = derive_directives(&scores, config);

        // Only the Imagery contribution differs; every other line is stable.
        let below_others: Vec<&String> =
            below.iter().filter(|d| **d != rule.mid_rule.clone().unwrap()).collect();
        let above_others: Vec<&String> =
            above.iter().filter(|d| **d != rule.high_rule).collect();
        assert_eq!(below_others, above_others);
        assert!(above.contains(&rule.high_rule));
    }

    #[test]
    fn test_trait_absent_from_config_is_skipped() {
        let config = TraitConfig::from_json(
            r#"{"Urgency": {"high_threshold": 8, "low_threshold": 3,
                "high_rule": "push hard", "low_rule": "ease off"}}"#,
        )
        .unwrap();
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Urgency, 9);
        scores.set(TraitName::Imagery, 9);
        let directives = derive_directives(&scores, &config);
        assert_eq!(directives, vec!["push hard".to_string()]);
    }

    #[test]
    fn test_example_count_tiers() {
        assert_eq!(example_count(10), 3);
        assert_eq!(example_count(8), 3);
        assert_eq!(example_count(7), 2);
        assert_eq!(example_count(4), 2);
        assert_eq!(example_count(3), 1);
        assert_eq!(example_count(1), 1);
    }

    #[test]
    fn test_examples_truncate_in_bank_order() {
        let mut scores = TraitScores::empty();
        scores.set(TraitName::Urgency, 5);
        let lines = derive_examples(&scores);
        assert_eq!(lines.len(), 1);
        let bank = example_bank(TraitName::Urgency);
        assert!(lines[0].contains(bank[0]));
        assert!(lines[0].contains(bank[1]));
        assert!(!lines[0].contains(bank[2]));
    }

    #[test]
    fn test_examples_and_directives_stay_separate() {
        let config = TraitConfig::embedded();
        let scores = TraitScores::default();
        let directives = derive_directives(&scores, config);
        let examples = derive_examples(&scores);
        for example in &examples {
            assert!(!directives.contains(example));
        }
    }
}
