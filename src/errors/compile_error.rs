//! Compiler and instance-writer errors.

/// Errors raised while compiling a temporal graph or writing instance files.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The declared TG type names no known grammar. Fatal for the call.
    #[error("unsupported TG type {tg_type:?}: must be \"TGQA\", \"TimeQA\" or \"TempReason\"")]
    UnsupportedGrammar { tg_type: String },

    /// TimeQA grammar only: one line failed to parse, so the whole
    /// graph's compilation is abandoned with no partial facts.
    #[error("unparseable TimeQA line: {line:?}")]
    UnparseableLine { line: String },

    /// Instance file could not be written.
    #[error("instance write failed: {0}")]
    Io(#[from] std::io::Error),
}
