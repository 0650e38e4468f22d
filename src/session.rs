//! Session-scoped state.
//!
//! The pipeline hands artifacts between stages through a per-session record:
//! a briefing insight staged for the copywriter, a draft staged for the
//! focus group, the last generated copy, the last debate result. State is
//! explicit and keyed by session id; no component reads ambient globals.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::debate::DebateOutcome;
use crate::generation::GeneratedCopy;

/// Opaque session identifier.
pub type SessionId = Uuid;

/// The last debate run, rendered for re-display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateRecord {
    pub transcript: String,
    pub analysis: String,
}

/// Per-session pipeline state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last successful generation; only replaced by a newer success.
    pub generated_copy: Option<GeneratedCopy>,
    /// Insight staged for the copywriter.
    pub intelligence_brief: Option<String>,
    /// Where the staged insight came from.
    pub intelligence_source: Option<String>,
    /// Creative staged for the focus group.
    pub draft_for_validation: Option<String>,
    /// Last completed debate.
    pub last_debate: Option<DebateRecord>,
}

/// Process-wide session registry.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session.
    pub fn create(&self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions.write().insert(id, SessionState::default());
        id
    }

    /// Clone the current state of a session.
    pub fn snapshot(&self, id: SessionId) -> Option<SessionState> {
        self.sessions.read().get(&id).cloned()
    }

    /// Mutate a session in place, creating it when absent.
    pub fn update<F>(&self, id: SessionId, f: F)
    where
        F: FnOnce(&mut SessionState),
    {
        let mut sessions = self.sessions.write();
        f(sessions.entry(id).or_default());
    }

    /// Stage a briefing insight for the copywriter.
    pub fn stage_insight(&self, id: SessionId, brief: &str, source: &str) {
        self.update(id, |state| {
            state.intelligence_brief = Some(brief.to_string());
            state.intelligence_source = Some(source.to_string());
        });
    }

    /// Stage a draft for the focus group.
    pub fn stage_draft(&self, id: SessionId, draft: &str) {
        self.update(id, |state| {
            state.draft_for_validation = Some(draft.to_string());
        });
    }

    /// Record a completed debate for re-display.
    pub fn record_debate(&self, id: SessionId, outcome: &DebateOutcome) {
        self.update(id, |state| {
            state.last_debate = Some(DebateRecord {
                transcript: outcome.transcript.to_prompt_text(),
                analysis: outcome.raw_analysis.clone(),
            });
        });
    }

    /// Drop a session.
    pub fn remove(&self, id: SessionId) {
        self.sessions.write().remove(&id);
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether no sessions exist.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_snapshot() {
        let store = SessionStore::new();
        let id = store.create();
        let state = store.snapshot(id).unwrap();
        assert!(state.generated_copy.is_none());
        assert!(state.last_debate.is_none());
    }

    #[test]
    fn test_stage_insight_and_draft() {
        let store = SessionStore::new();
        let id = store.create();
        store.stage_insight(id, "lithium brief", "Daily Briefing");
        store.stage_draft(id, "draft text");

        let state = store.snapshot(id).unwrap();
        assert_eq!(state.intelligence_brief.as_deref(), Some("lithium brief"));
        assert_eq!(state.intelligence_source.as_deref(), Some("Daily Briefing"));
        assert_eq!(state.draft_for_validation.as_deref(), Some("draft text"));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create();
        let b = store.create();
        store.stage_draft(a, "only in a");
        assert!(store.snapshot(b).unwrap().draft_for_validation.is_none());
    }

    #[test]
    fn test_update_creates_missing_session() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.update(id, |state| {
            state.intelligence_brief = Some("late".to_string());
        });
        assert!(store.snapshot(id).is_some());
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        let id = store.create();
        store.remove(id);
        assert!(store.snapshot(id).is_none());
        assert!(store.is_empty());
    }
}
