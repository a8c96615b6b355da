//! Batch solver driver.
//!
//! Iterates instance directories, invokes the solver once per `.lp`
//! file, and classifies each outcome. Strictly sequential, one process
//! at a time; a bad instance never halts the run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SolverConfig;
use crate::errors::SolverError;
use crate::instances::INSTANCE_EXT;

use super::process;
use super::types::{InstanceResult, ResultSet, SolverOutput};

/// Drives one batch of compiled instances through the external solver.
pub struct BatchDriver {
    config: SolverConfig,
}

impl BatchDriver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve every instance and write the result file once at the end.
    ///
    /// Every attempted instance gets exactly one entry. Solver-level
    /// failures (timeout, stderr output, malformed output) are folded
    /// into per-instance results; only driver-level faults (unreadable
    /// instance directory, unwritable result file) abort the batch.
    pub fn run(&self) -> Result<ResultSet, SolverError> {
        let mut results = ResultSet::default();

        for dir in &self.config.instance_dirs {
            for path in list_instances(dir)? {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let outcome = self.solve_instance(&path);
                match &outcome {
                    InstanceResult::Atoms(groups) => {
                        tracing::info!(instance = %name, predicates = groups.len(), "solved")
                    }
                    InstanceResult::Unsatisfiable => {
                        tracing::info!(instance = %name, "unsatisfiable")
                    }
                    InstanceResult::Timeout => tracing::warn!(instance = %name, "timed out"),
                    InstanceResult::Error(message) => {
                        tracing::warn!(instance = %name, error = %message, "solver failed")
                    }
                }
                results.insert(name, outcome);
            }
        }

        let out = self.config.effective_output_path();
        results.write(&out)?;
        tracing::info!(instances = results.len(), path = %out.display(), "batch complete");
        Ok(results)
    }

    fn solve_instance(&self, instance: &Path) -> InstanceResult {
        let run = process::run_with_deadline(
            self.config.effective_solver_bin(),
            &self.config.encoding,
            instance,
            self.config.effective_timeout(),
        );

        match run {
            Err(SolverError::Timeout) => InstanceResult::Timeout,
            Err(err) => InstanceResult::Error(err.to_string()),
            Ok(run) if !run.stderr.trim().is_empty() => InstanceResult::Error(
                SolverError::SolverReported {
                    stderr: run.stderr.trim().to_string(),
                }
                .to_string(),
            ),
            Ok(run) => classify_output(&run.stdout),
        }
    }
}

/// `.lp` files of one instance directory, in sorted name order.
fn list_instances(dir: &Path) -> Result<Vec<PathBuf>, SolverError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().and_then(|ext| ext.to_str()) == Some(INSTANCE_EXT)
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// Classify structured solver output into an instance result.
/// Malformed output becomes an `Error` result, never a fault.
fn classify_output(stdout: &str) -> InstanceResult {
    let output: SolverOutput = match serde_json::from_str(stdout) {
        Ok(output) => output,
        Err(err) => {
            return InstanceResult::Error(
                SolverError::MalformedOutput {
                    reason: err.to_string(),
                }
                .to_string(),
            )
        }
    };

    if output.result == "UNSATISFIABLE" {
        return InstanceResult::Unsatisfiable;
    }

    // Atoms from every call and witness are concatenated; if the
    // solver ever returns multiple models they are conflated here.
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for call in &output.calls {
        for witness in &call.witnesses {
            for atom in &witness.atoms {
                groups
                    .entry(predicate_of(atom).to_string())
                    .or_default()
                    .push(atom.clone());
            }
        }
    }
    InstanceResult::Atoms(groups)
}

/// Grouping key of an atom: the text before its first `(`, or the whole
/// atom when it has no arguments.
fn predicate_of(atom: &str) -> &str {
    atom.split_once('(').map(|(predicate, _)| predicate).unwrap_or(atom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_of() {
        assert_eq!(predicate_of("event(a, b, c, 1, 1, 2, 12)"), "event");
        assert_eq!(predicate_of("empty_room"), "empty_room");
    }

    #[test]
    fn test_classify_unsat() {
        let out = classify_output(r#"{"Result": "UNSATISFIABLE", "Call": []}"#);
        assert_eq!(out, InstanceResult::Unsatisfiable);
    }

    #[test]
    fn test_classify_groups_preserve_first_seen_order() {
        let out = classify_output(
            r#"{
                "Result": "SATISFIABLE",
                "Call": [{"Witnesses": [{"Value": [
                    "event(b)", "holds(x)", "event(a)", "empty_room"
                ]}]}]
            }"#,
        );
        let InstanceResult::Atoms(groups) = out else {
            panic!("expected atoms");
        };
        assert_eq!(groups["event"], vec!["event(b)", "event(a)"]);
        assert_eq!(groups["holds"], vec!["holds(x)"]);
        assert_eq!(groups["empty_room"], vec!["empty_room"]);
    }

    #[test]
    fn test_classify_concatenates_all_witnesses() {
        let out = classify_output(
            r#"{
                "Result": "SATISFIABLE",
                "Call": [
                    {"Witnesses": [{"Value": ["event(a)"]}, {"Value": ["event(b)"]}]},
                    {"Witnesses": [{"Value": ["event(c)"]}]}
                ]
            }"#,
        );
        let InstanceResult::Atoms(groups) = out else {
            panic!("expected atoms");
        };
        assert_eq!(groups["event"], vec!["event(a)", "event(b)", "event(c)"]);
    }

    #[test]
    fn test_classify_malformed_is_error() {
        assert!(matches!(
            classify_output("not json at all"),
            InstanceResult::Error(_)
        ));
        assert!(matches!(
            classify_output(r#"{"Call": []}"#),
            InstanceResult::Error(_)
        ));
    }
}
