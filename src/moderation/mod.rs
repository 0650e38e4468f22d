//! Moderator analysis parsing.
//!
//! Analysis models are asked for a bare JSON object but routinely wrap it
//! in prose or markdown fences. The parser keeps the lenient extraction
//! heuristic (first `{` to last `}`) and decodes the enclosed object
//! all-or-nothing: on any failure the caller gets the raw text back,
//! verbatim, never a partially-filled verdict.

use serde::{Deserialize, Serialize};

use crate::utilities::text::normalize_dashes;

/// Suggested replacement creative from the moderator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    pub headline: String,
    pub body: String,
}

/// The structured verdict a moderator run aims to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeratorVerdict {
    pub executive_summary: String,
    pub key_objections: Vec<String>,
    pub actionable_fixes: Vec<String>,
    pub rewrite: Rewrite,
}

/// Outcome of a moderation parse: a verdict, or the raw text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeratorAnalysis {
    Parsed(ModeratorVerdict),
    Raw(String),
}

impl ModeratorAnalysis {
    /// Parse raw model output, falling back to the verbatim text.
    pub fn from_raw(raw: &str) -> Self {
        match parse_verdict(raw) {
            Some(verdict) => ModeratorAnalysis::Parsed(verdict),
            None => ModeratorAnalysis::Raw(raw.to_string()),
        }
    }

    /// The structured verdict, when the parse succeeded.
    pub fn verdict(&self) -> Option<&ModeratorVerdict> {
        match self {
            ModeratorAnalysis::Parsed(v) => Some(v),
            ModeratorAnalysis::Raw(_) => None,
        }
    }
}

/// Slice out the outermost brace-delimited span of `text`.
///
/// Heuristic: first `{` to last `}`, after normalizing unicode dashes.
/// Tolerates prose and markdown fences around the object, but a stray
/// brace earlier or later in the same response (say, inside an embedded
/// creative) widens the span and can defeat the decode.
pub fn extract_json_object(text: &str) -> Option<String> {
    let normalized = normalize_dashes(text);
    let start = normalized.find('{')?;
    let end = normalized.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(normalized[start..=end].to_string())
}

/// Strict decode of the extracted object. All-or-nothing: any missing key
/// or type mismatch yields `None`, no partial-field recovery.
pub fn parse_verdict(raw: &str) -> Option<ModeratorVerdict> {
    let blob = extract_json_object(raw)?;
    match serde_json::from_str::<ModeratorVerdict>(&blob) {
        Ok(verdict) => Some(verdict),
        Err(e) => {
            log::debug!("moderator verdict decode failed: {}", e);
            None
        }
    }
}

/// The moderator's instruction: analyze the debate, return only JSON with
/// the fixed verdict keys.
pub fn moderator_prompt(transcript: &str, creative: &str) -> String {
    format!(
        "You are a Direct Response Copy Chief. Analyze this focus group debate.\n\
         \n\
         TRANSCRIPT:\n{}\n\
         \n\
         CREATIVE:\n{}\n\
         \n\
         Output JSON only:\n\
         {{\n\
         \x20   \"executive_summary\": \"...\",\n\
         \x20   \"key_objections\": [\"...\"],\n\
         \x20   \"actionable_fixes\": [\"...\"],\n\
         \x20   \"rewrite\": {{\n\
         \x20       \"headline\": \"...\",\n\
         \x20       \"body\": \"...\"\n\
         \x20   }}\n\
         }}",
        transcript, creative
    )
}
