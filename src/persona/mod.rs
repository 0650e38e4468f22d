//! Persona store.
//!
//! Loads a segmented persona catalog and flattens it into a uid-addressable
//! collection. Each flattened record gains a back-reference to its segment
//! label. Records missing required fields are quarantined (logged and
//! skipped) rather than allowed to fail downstream; a duplicate uid anywhere
//! in the catalog is a configuration error. A missing catalog file yields an
//! empty store so selection surfaces can render with zero options.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utilities::errors::CopyError;

/// The character sheet a persona speaks from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaCore {
    /// Display name; required.
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub occupation: String,
    /// Short biography used in the persona system prompt.
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
}

/// A flattened, addressable persona record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Catalog-wide unique id, taken from the record's declared id field.
    pub uid: String,
    /// Label of the segment the record came from.
    pub segment_label: String,
    pub core: PersonaCore,
}

/// Segment summary retained after flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInfo {
    pub label: String,
    /// Number of records that survived validation.
    pub count: usize,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    #[serde(default = "unknown_label")]
    label: String,
    #[serde(default)]
    personas: Vec<Value>,
}

fn unknown_label() -> String {
    "Unknown".to_string()
}

/// Immutable uid-addressable persona collection.
///
/// Loaded once and cached by the host for the process lifetime; a cold
/// reload means constructing a fresh store.
#[derive(Debug, Clone, Default)]
pub struct PersonaStore {
    segments: Vec<SegmentInfo>,
    personas: Vec<Persona>,
    index: HashMap<String, usize>,
}

impl PersonaStore {
    /// An empty store (zero segments, zero personas).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog file. A missing file is non-fatal and yields an empty
    /// store; an unreadable or malformed file is a configuration error.
    pub fn load(path: &Path) -> Result<Self, CopyError> {
        if !path.exists() {
            log::warn!("persona catalog {} not found, store is empty", path.display());
            return Ok(Self::empty());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CopyError::configuration(format!("persona catalog {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    /// Build a store from catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CopyError> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| CopyError::configuration(format!("persona catalog: {}", e)))?;

        let mut segments = Vec::new();
        let mut personas: Vec<Persona> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for segment in raw.segments {
            let mut count = 0usize;
            for record in segment.personas {
                let Some(persona) = validate_record(&segment.label, record) else {
                    continue;
                };
                if index.contains_key(&persona.uid) {
                    return Err(CopyError::configuration(format!(
                        "duplicate persona uid '{}' in catalog",
                        persona.uid
                    )));
                }
                index.insert(persona.uid.clone(), personas.len());
                personas.push(persona);
                count += 1;
            }
            segments.push(SegmentInfo {
                label: segment.label,
                count,
            });
        }

        log::info!(
            "persona store loaded: {} personas across {} segments",
            personas.len(),
            segments.len()
        );
        Ok(Self {
            segments,
            personas,
            index,
        })
    }

    /// Look up a persona by uid.
    pub fn get(&self, uid: &str) -> Option<&Persona> {
        self.index.get(uid).map(|&i| &self.personas[i])
    }

    /// All uids, in catalog order.
    pub fn uids(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.uid.as_str()).collect()
    }

    /// All flattened personas, in catalog order.
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// Segment summaries, in catalog order.
    pub fn segments(&self) -> &[SegmentInfo] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

/// Decode one raw record; `None` quarantines it.
fn validate_record(segment_label: &str, record: Value) -> Option<Persona> {
    let uid = match record.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            log::warn!(
                "quarantined persona record in segment '{}': missing id",
                segment_label
            );
            return None;
        }
    };

    let core: PersonaCore = match record.get("core").cloned().map(serde_json::from_value) {
        Some(Ok(core)) => core,
        Some(Err(e)) => {
            log::warn!(
                "quarantined persona '{}' in segment '{}': {}",
                uid,
                segment_label,
                e
            );
            return None;
        }
        None => {
            log::warn!(
                "quarantined persona '{}' in segment '{}': missing core",
                uid,
                segment_label
            );
            return None;
        }
    };

    Some(Persona {
        uid,
        segment_label: segment_label.to_string(),
        core,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"{
        "segments": [
            {
                "label": "Retirees",
                "personas": [
                    {"id": "1", "core": {"name": "Margaret", "age": 67,
                        "occupation": "Retired teacher",
                        "narrative": "Lives off a pension and a small portfolio.",
                        "values": ["Security"], "concerns": ["Scams"]}},
                    {"id": 2, "core": {"name": "Frank", "age": 71,
                        "occupation": "Retired engineer",
                        "narrative": "Self-funded retiree.",
                        "values": ["Independence"], "concerns": ["Inflation"]}}
                ]
            },
            {
                "label": "Young Professionals",
                "personas": [
                    {"id": "yp-1", "core": {"name": "Dev", "age": 29,
                        "occupation": "Analyst", "narrative": "First-time investor.",
                        "values": ["Growth"], "concerns": ["Fees"]}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_flatten_with_segment_backreference() {
        let store = PersonaStore::from_json(CATALOG).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("1").unwrap().segment_label, "Retirees");
        assert_eq!(store.get("yp-1").unwrap().segment_label, "Young Professionals");
    }

    #[test]
    fn test_numeric_id_becomes_uid_string() {
        let store = PersonaStore::from_json(CATALOG).unwrap();
        assert_eq!(store.get("2").unwrap().core.name, "Frank");
    }

    #[test]
    fn test_segment_counts() {
        let store = PersonaStore::from_json(CATALOG).unwrap();
        let segments = store.segments();
        assert_eq!(segments[0].count, 2);
        assert_eq!(segments[1].count, 1);
    }

    #[test]
    fn test_quarantines_record_missing_id() {
        let json = r#"{"segments": [{"label": "S", "personas": [
            {"core": {"name": "NoId"}},
            {"id": "ok", "core": {"name": "Fine"}}
        ]}]}"#;
        let store = PersonaStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("ok").unwrap().core.name, "Fine");
    }

    #[test]
    fn test_quarantines_record_missing_name() {
        let json = r#"{"segments": [{"label": "S", "personas": [
            {"id": "x", "core": {"age": 40}}
        ]}]}"#;
        let store = PersonaStore::from_json(json).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_uid_across_segments_rejected() {
        let json = r#"{"segments": [
            {"label": "A", "personas": [{"id": "dup", "core": {"name": "One"}}]},
            {"label": "B", "personas": [{"id": "dup", "core": {"name": "Two"}}]}
        ]}"#;
        let err = PersonaStore::from_json(json).unwrap_err();
        assert!(matches!(err, CopyError::Configuration(_)));
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let store = PersonaStore::load(Path::new("/nonexistent/personas.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.segments().is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let store = PersonaStore::load(file.path()).unwrap();
        assert_eq!(store.uids(), vec!["1", "2", "yp-1"]);
    }

    #[test]
    fn test_malformed_catalog_is_configuration_error() {
        assert!(matches!(
            PersonaStore::from_json("{broken").unwrap_err(),
            CopyError::Configuration(_)
        ));
    }
}
