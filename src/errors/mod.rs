//! Error handling for tgr-core.
//! One error enum per subsystem, `thiserror` only.

pub mod compile_error;
pub mod solver_error;

pub use compile_error::CompileError;
pub use solver_error::SolverError;
