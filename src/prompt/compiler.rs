//! Deterministic prompt assembly.

use serde::{Deserialize, Serialize};

use crate::prompt::brief::CampaignBrief;
use crate::prompt::length::LengthChoice;
use crate::prompt::locale::Market;
use crate::prompt::system::system_directive;
use crate::prompt::templates::CopyType;
use crate::traits::{derive_directives, derive_examples, TraitConfig, TraitScores};
use crate::utilities::errors::CopyError;
use crate::utilities::text::bullet_line;

/// Guardrails against fabricated specifics. A needed-but-missing figure gets
/// the placeholder token instead of an invention.
const ANTI_HALLUCINATION_RULES: &str =
    "Do not invent statistics, named authorities, studies, or specific \
     numbers that do not appear in the brief. Where a figure or source is \
     needed but missing, write the placeholder [VERIFY] instead.";

/// An immutable compiled prompt pair. Same inputs, byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPrompt {
    /// Voice, locale, formatting, and compliance rules.
    pub system: String,
    /// Per-campaign structure, guidance, brief, and constraints.
    pub user: String,
}

/// Compiles briefs and trait vectors into generation prompts.
#[derive(Debug, Clone)]
pub struct PromptCompiler<'a> {
    config: &'a TraitConfig,
}

impl Default for PromptCompiler<'static> {
    fn default() -> Self {
        Self::new(TraitConfig::embedded())
    }
}

impl<'a> PromptCompiler<'a> {
    pub fn new(config: &'a TraitConfig) -> Self {
        Self { config }
    }

    /// Assemble the prompt pair, in fixed section order: trait guidance,
    /// structural template, hard requirements (omitted entirely when empty),
    /// brief bullets (blank fields omitted), length constraint, guardrails.
    pub fn compile(
        &self,
        copy_type: CopyType,
        scores: &TraitScores,
        brief: &CampaignBrief,
        length: LengthChoice,
        market: Market,
    ) -> Result<CompiledPrompt, CopyError> {
        brief.validate()?;

        let mut sections: Vec<String> = Vec::new();

        sections.push(format!(
            "Write a {} for the {} market.",
            copy_type.label(),
            market.name()
        ));

        let examples = derive_examples(scores);
        if !examples.is_empty() {
            sections.push(format!(
                "STYLE GUIDANCE (match the register of these lines, do not copy them):\n{}",
                examples.join("\n")
            ));
        }

        sections.push(copy_type.structure().to_string());

        let directives = derive_directives(scores, self.config);
        if !directives.is_empty() {
            let numbered: Vec<String> = directives
                .iter()
                .enumerate()
                .map(|(i, d)| format!("{}. {}", i + 1, d))
                .collect();
            sections.push(format!("HARD REQUIREMENTS:\n{}", numbered.join("\n")));
        }

        let mut brief_lines: Vec<String> = Vec::new();
        if let Some(line) = bullet_line("Campaign hook", &brief.hook) {
            brief_lines.push(line);
        }
        if let Some(line) = bullet_line("Product / offer details", &brief.details) {
            brief_lines.push(line);
        }
        sections.push(format!("BRIEF:\n{}", brief_lines.join("\n")));

        sections.push(length.word_range().directive());
        sections.push(ANTI_HALLUCINATION_RULES.to_string());
        sections.push("Return ONLY the copy.".to_string());

        Ok(CompiledPrompt {
            system: system_directive(market),
            user: sections.join("\n\n"),
        })
    }
}
