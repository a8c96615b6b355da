//! Solver types - clingo's JSON output schema and classified results.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SolverError;

/// Top-level structure of clingo's `--outf=2` output. Only the fields
/// the driver consumes are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverOutput {
    /// "SATISFIABLE" or "UNSATISFIABLE".
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Call", default)]
    pub calls: Vec<SolverCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverCall {
    #[serde(rename = "Witnesses", default)]
    pub witnesses: Vec<SolverWitness>,
}

/// One candidate model: a flat list of atom strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverWitness {
    #[serde(rename = "Value", default)]
    pub atoms: Vec<String>,
}

/// Classified outcome of one instance. Exactly one per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceResult {
    Unsatisfiable,
    /// Entailed atoms grouped by predicate name, first-seen order
    /// preserved within each group.
    Atoms(BTreeMap<String, Vec<String>>),
    Timeout,
    Error(String),
}

// The result file encodes each outcome as a JSON object whose shape the
// downstream QA module pattern-matches on: {"UNSAT": true},
// {"TIMEOUT": true}, {"ERROR": "<msg>"}, or a plain predicate→atoms map.

impl Serialize for InstanceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InstanceResult::Unsatisfiable => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("UNSAT", &true)?;
                map.end()
            }
            InstanceResult::Timeout => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("TIMEOUT", &true)?;
                map.end()
            }
            InstanceResult::Error(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("ERROR", message)?;
                map.end()
            }
            InstanceResult::Atoms(groups) => groups.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for InstanceResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        if map.get("UNSAT").and_then(serde_json::Value::as_bool) == Some(true) {
            return Ok(InstanceResult::Unsatisfiable);
        }
        if map.get("TIMEOUT").and_then(serde_json::Value::as_bool) == Some(true) {
            return Ok(InstanceResult::Timeout);
        }
        if let Some(message) = map.get("ERROR").and_then(serde_json::Value::as_str) {
            return Ok(InstanceResult::Error(message.to_string()));
        }

        let mut groups = BTreeMap::new();
        for (predicate, atoms) in map {
            let atoms: Vec<String> =
                serde_json::from_value(atoms).map_err(D::Error::custom)?;
            groups.insert(predicate, atoms);
        }
        Ok(InstanceResult::Atoms(groups))
    }
}

/// Mapping from instance file name to classified outcome, for one batch
/// run. Written once after all instances complete; a rerun overwrites
/// the target in full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(pub BTreeMap<String, InstanceResult>);

impl ResultSet {
    pub fn insert(&mut self, instance: String, result: InstanceResult) {
        self.0.insert(instance, result);
    }

    pub fn get(&self, instance: &str) -> Option<&InstanceResult> {
        self.0.get(instance)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load a previously written batch result file. Explicitly passed
    /// lookup structure, loaded immutably once — no ambient cache.
    pub fn load(path: &Path) -> Result<Self, SolverError> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SolverError::MalformedOutput {
                reason: format!("{}: {e}", path.display()),
            }
        })
    }

    /// Serialize the whole set to `path`, overwriting it.
    pub fn write(&self, path: &Path) -> Result<(), SolverError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|e| {
            SolverError::MalformedOutput {
                reason: format!("{}: {e}", path.display()),
            }
        })
    }

    /// Atoms supporting one story, concatenated over the requested
    /// predicates. Missing stories, non-`Atoms` outcomes, and unknown
    /// predicates all contribute nothing.
    pub fn facts_for(&self, story_key: &str, predicates: &[&str]) -> Vec<String> {
        let Some(InstanceResult::Atoms(groups)) = self.0.get(story_key) else {
            return Vec::new();
        };
        predicates
            .iter()
            .filter_map(|predicate| groups.get(*predicate))
            .flatten()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_shapes() {
        assert_eq!(
            serde_json::to_string(&InstanceResult::Unsatisfiable).unwrap(),
            r#"{"UNSAT":true}"#
        );
        assert_eq!(
            serde_json::to_string(&InstanceResult::Timeout).unwrap(),
            r#"{"TIMEOUT":true}"#
        );
        assert_eq!(
            serde_json::to_string(&InstanceResult::Error("boom".to_string())).unwrap(),
            r#"{"ERROR":"boom"}"#
        );
    }

    #[test]
    fn test_atoms_serialize_as_plain_map() {
        let mut groups = BTreeMap::new();
        groups.insert("event".to_string(), vec!["event(a, b, c, 1, 1, 2, 12)".to_string()]);
        let json = serde_json::to_string(&InstanceResult::Atoms(groups)).unwrap();
        assert_eq!(json, r#"{"event":["event(a, b, c, 1, 1, 2, 12)"]}"#);
    }

    #[test]
    fn test_round_trip() {
        for result in [
            InstanceResult::Unsatisfiable,
            InstanceResult::Timeout,
            InstanceResult::Error("solver error: x".to_string()),
        ] {
            let json = serde_json::to_string(&result).unwrap();
            let back: InstanceResult = serde_json::from_str(&json).unwrap();
            assert_eq!(back, result);
        }
    }

    #[test]
    fn test_solver_output_schema() {
        let raw = r#"{
            "Result": "SATISFIABLE",
            "Call": [{"Witnesses": [{"Value": ["holds(a)", "event(x, y, z, 1, 1, 2, 12)"]}]}]
        }"#;
        let output: SolverOutput = serde_json::from_str(raw).unwrap();
        assert_eq!(output.result, "SATISFIABLE");
        assert_eq!(output.calls[0].witnesses[0].atoms.len(), 2);
    }

    #[test]
    fn test_facts_for() {
        let mut groups = BTreeMap::new();
        groups.insert("event".to_string(), vec!["event(a)".to_string()]);
        groups.insert("holds".to_string(), vec!["holds(b)".to_string()]);
        let mut set = ResultSet::default();
        set.insert("story1.lp".to_string(), InstanceResult::Atoms(groups));

        assert_eq!(
            set.facts_for("story1.lp", &["event", "holds"]),
            vec!["event(a)".to_string(), "holds(b)".to_string()]
        );
        assert!(set.facts_for("story1.lp", &["missing"]).is_empty());
        assert!(set.facts_for("absent.lp", &["event"]).is_empty());
    }
}
