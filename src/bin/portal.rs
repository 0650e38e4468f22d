//! Command-line driver for manual end-to-end runs.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY` — key for the primary model
//! - `GOOGLE_API_KEY` — key for the analysis model (moderation falls back
//!   to the primary model without it)
//! - `PERSONA_CATALOG` — path to the persona catalog (default: personas.json)
//! - `RUST_LOG` — log filter (default: info)
//!
//! # Usage
//!
//! ```bash
//! portal generate "<hook>" "<details>"
//! portal debate <skeptic_uid> <believer_uid> < creative.txt
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use copysmith::llm::providers::{GeminiCompletion, OpenAiCompletion};
use copysmith::llm::{
    LanguageModel, ProviderChain, DEFAULT_ANALYSIS_MODEL, DEFAULT_GENERATION_MODEL,
    DEFAULT_PERSONA_MODEL,
};
use copysmith::prompt::{CampaignBrief, CopyType, LengthChoice, Market, PromptCompiler};
use copysmith::{
    CopyGenerator, DebateOrchestrator, ModeratorAnalysis, PersonaStore, SessionStore, TraitScores,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("generate") => generate(&args[1..]),
        Some("debate") => debate(&args[1..]),
        _ => {
            eprintln!("usage: portal generate <hook> <details>");
            eprintln!("       portal debate <skeptic_uid> <believer_uid> < creative.txt");
            bail!("unknown command");
        }
    }
}

fn generate(args: &[String]) -> Result<()> {
    let hook = args.first().cloned().unwrap_or_default();
    let details = args.get(1).cloned().unwrap_or_default();

    let prompt = PromptCompiler::default()
        .compile(
            CopyType::Email,
            &TraitScores::default(),
            &CampaignBrief::new(hook, details),
            LengthChoice::Medium,
            Market::UnitedStates,
        )
        .context("compiling prompt")?;

    let sessions = SessionStore::new();
    let session = sessions.create();
    let generator = CopyGenerator::new(Arc::new(OpenAiCompletion::new(
        DEFAULT_GENERATION_MODEL,
        None,
        None,
    )));

    println!("{}", generator.generate_for_session(&prompt, &sessions, session));
    Ok(())
}

fn debate(args: &[String]) -> Result<()> {
    let [skeptic_uid, believer_uid] = args else {
        bail!("debate needs <skeptic_uid> <believer_uid>");
    };

    let catalog: PathBuf = std::env::var("PERSONA_CATALOG")
        .unwrap_or_else(|_| "personas.json".to_string())
        .into();
    let store = PersonaStore::load(&catalog).context("loading persona catalog")?;
    if store.is_empty() {
        bail!("persona catalog {} has no personas", catalog.display());
    }

    let mut creative = String::new();
    std::io::stdin()
        .read_to_string(&mut creative)
        .context("reading creative from stdin")?;

    let participants = Arc::new(OpenAiCompletion::new(DEFAULT_PERSONA_MODEL, None, None));
    let analysis = ProviderChain::new(vec![
        Arc::new(GeminiCompletion::new(DEFAULT_ANALYSIS_MODEL, None)) as Arc<dyn LanguageModel>,
        participants.clone(),
    ]);

    let outcome = DebateOrchestrator::new(&store, participants, analysis).run(
        &creative,
        skeptic_uid,
        believer_uid,
    )?;

    println!("=== Transcript ===\n{}\n", outcome.transcript);
    match outcome.analysis {
        ModeratorAnalysis::Parsed(verdict) => {
            println!("=== Moderator Verdict ===");
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        ModeratorAnalysis::Raw(raw) => {
            println!("=== Moderator Analysis (unparsed) ===\n{}", raw);
        }
    }
    Ok(())
}
