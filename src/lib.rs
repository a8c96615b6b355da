//! tgr-core: Temporal-fact compilation and batch ASP solving engine
//!
//! This crate provides the symbolic core of the temporal-graph QA pipeline:
//! - Sanitize: normalization of free text into valid ASP identifiers
//! - Compiler: two temporal-graph grammars (TGQA, TimeQA) compiled into
//!   ground `event/7` facts, selected by a declared-type dispatcher
//! - Instances: stable file naming and writing of per-story fact files
//! - Solver: sequential batch driving of an external clingo process with
//!   per-instance timeouts, output classification, and result aggregation

pub mod compiler;
pub mod config;
pub mod errors;
pub mod instances;
pub mod sanitize;
pub mod solver;

// Re-exports for convenience
pub use compiler::{compile, Fact, TgType, TimePoint};
pub use config::SolverConfig;
pub use errors::{CompileError, SolverError};
pub use instances::{instance_file_name, story_key, write_instance, StoryRecord};
pub use solver::{BatchDriver, InstanceResult, ResultSet, SolverOutput};
