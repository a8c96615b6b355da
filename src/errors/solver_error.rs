//! Solver-driver errors.
//!
//! These never abort a batch: the driver folds each one into the
//! per-instance result and moves on.

/// Errors from one external solver invocation.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The process exceeded its deadline, was killed, and the run abandoned.
    #[error("solver timed out")]
    Timeout,

    /// The solver wrote to stderr; treated as a hard failure for the instance.
    #[error("solver error: {stderr}")]
    SolverReported { stderr: String },

    /// Structured output missing expected fields or not valid JSON.
    #[error("malformed solver output: {reason}")]
    MalformedOutput { reason: String },

    /// Spawn or pipe failure.
    #[error("solver process I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
