//! Batch solver configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one batch solving run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolverConfig {
    /// Solver binary. Default: "clingo" on PATH.
    pub solver_bin: Option<String>,
    /// Shared reasoning-rule file passed to every invocation.
    pub encoding: PathBuf,
    /// Directories of `.lp` instance files, processed in order.
    pub instance_dirs: Vec<PathBuf>,
    /// Per-instance timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// Batch result file. Default: "results.json".
    pub output_path: Option<PathBuf>,
}

impl SolverConfig {
    /// Returns the effective solver binary, defaulting to "clingo".
    pub fn effective_solver_bin(&self) -> &str {
        self.solver_bin.as_deref().unwrap_or("clingo")
    }

    /// Returns the effective per-instance timeout, defaulting to 30s.
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }

    /// Returns the effective output path, defaulting to "results.json".
    pub fn effective_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("results.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.effective_solver_bin(), "clingo");
        assert_eq!(config.effective_timeout(), Duration::from_secs(30));
        assert_eq!(config.effective_output_path(), PathBuf::from("results.json"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"encoding": "rules.lp", "timeout_secs": 5}"#).unwrap();
        assert_eq!(config.encoding, PathBuf::from("rules.lp"));
        assert_eq!(config.effective_timeout(), Duration::from_secs(5));
    }
}
