//! Cooldown-gated briefing runs.
//!
//! The scrape + summarize sequence is expensive, so a run only happens when
//! enough wall-clock time has passed since the last successful one. The
//! last-run timestamp and cached summary live in external key-value state
//! behind [`RunMetadataStore`]. The check is advisory: the read-then-write
//! sequence takes no lock, so two near-simultaneous callers can both pass
//! it and both do real work. Single-operator usage assumed.

use chrono::{DateTime, NaiveDateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::utilities::errors::CopyError;

/// Wire format for persisted timestamps.
pub const METADATA_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hours that must elapse before a new real run.
pub const DEFAULT_COOLDOWN_HOURS: f64 = 3.0;

/// Render a timestamp in the metadata wire format.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(METADATA_TIME_FORMAT).to_string()
}

/// Parse a metadata wire-format timestamp as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CopyError> {
    NaiveDateTime::parse_from_str(s, METADATA_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| CopyError::configuration(format!("run metadata timestamp '{}': {}", s, e)))
}

/// The two persisted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub last_run: Option<DateTime<Utc>>,
    pub last_summary: Option<String>,
}

/// External key-value persistence for run metadata.
pub trait RunMetadataStore {
    /// Read the last-run record.
    fn last_run(&self) -> Result<RunMetadata, CopyError>;
    /// Persist a successful run.
    fn record_run(&self, at: DateTime<Utc>, summary: &str) -> Result<(), CopyError>;
}

/// Process-local metadata store, for hosts without external persistence and
/// for tests.
#[derive(Debug, Default)]
pub struct InMemoryRunMetadata {
    inner: Mutex<RunMetadata>,
}

impl InMemoryRunMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a prior run.
    pub fn seeded(at: DateTime<Utc>, summary: &str) -> Self {
        Self {
            inner: Mutex::new(RunMetadata {
                last_run: Some(at),
                last_summary: Some(summary.to_string()),
            }),
        }
    }
}

impl RunMetadataStore for InMemoryRunMetadata {
    fn last_run(&self) -> Result<RunMetadata, CopyError> {
        Ok(self.inner.lock().clone())
    }

    fn record_run(&self, at: DateTime<Utc>, summary: &str) -> Result<(), CopyError> {
        *self.inner.lock() = RunMetadata {
            last_run: Some(at),
            last_summary: Some(summary.to_string()),
        };
        Ok(())
    }
}

/// The scrape and summarize collaborators, supplied by the host.
pub trait SignalCollaborators {
    /// Populate the signal store. A failure here is fatal to the run.
    fn fetch_and_store(&self) -> Result<(), CopyError>;
    /// Condense stored signals into one summary text.
    fn summarize(&self) -> Result<String, CopyError>;
}

/// Result of a briefing request.
#[derive(Debug, Clone, PartialEq)]
pub enum BriefingOutcome {
    /// Inside the cooldown window: the cached summary, unchanged, with the
    /// hours elapsed since the last run. A valid terminal outcome, not an
    /// error.
    Cooldown {
        summary: Option<String>,
        elapsed_hours: f64,
    },
    /// A real run happened.
    Fresh { summary: String },
}

impl BriefingOutcome {
    /// The summary text, whichever path produced it.
    pub fn summary(&self) -> Option<&str> {
        match self {
            BriefingOutcome::Cooldown { summary, .. } => summary.as_deref(),
            BriefingOutcome::Fresh { summary } => Some(summary),
        }
    }
}

/// Runs the briefing flow under the cooldown policy.
#[derive(Debug, Clone)]
pub struct BriefingService {
    cooldown_hours: f64,
}

impl Default for BriefingService {
    fn default() -> Self {
        Self {
            cooldown_hours: DEFAULT_COOLDOWN_HOURS,
        }
    }
}

impl BriefingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the cooldown window.
    pub fn with_cooldown_hours(mut self, hours: f64) -> Self {
        self.cooldown_hours = hours;
        self
    }

    /// Run with the current wall clock.
    pub fn run_now(
        &self,
        metadata: &dyn RunMetadataStore,
        signals: &dyn SignalCollaborators,
    ) -> Result<BriefingOutcome, CopyError> {
        self.run(metadata, signals, Utc::now())
    }

    /// Run the briefing flow at the given instant. Inside the window the
    /// cached summary is returned and the collaborators are not invoked.
    pub fn run(
        &self,
        metadata: &dyn RunMetadataStore,
        signals: &dyn SignalCollaborators,
        now: DateTime<Utc>,
    ) -> Result<BriefingOutcome, CopyError> {
        let record = metadata.last_run()?;
        let elapsed_hours = match record.last_run {
            Some(last) => (now - last).num_milliseconds() as f64 / 3_600_000.0,
            None => f64::INFINITY,
        };

        if elapsed_hours < self.cooldown_hours {
            log::info!(
                "cooldown active: last briefing ran {:.1}h ago (window {}h), serving cached summary",
                elapsed_hours,
                self.cooldown_hours
            );
            return Ok(BriefingOutcome::Cooldown {
                summary: record.last_summary,
                elapsed_hours,
            });
        }

        log::info!("cooldown clear ({:.1}h elapsed), running briefing", elapsed_hours);
        signals.fetch_and_store()?;
        let summary = signals.summarize()?;
        metadata.record_run(now, &summary)?;
        Ok(BriefingOutcome::Fresh { summary })
    }
}
