//! Solver module - sequential batch driving of an external ASP solver
//!
//! Each instance file gets one process invocation under a hard
//! deadline; the outcome is classified into exactly one of
//! unsatisfiable / atoms / timeout / error and aggregated into a
//! result set written once at the end of the batch.

mod driver;
mod process;
mod types;

pub use driver::BatchDriver;
pub use process::{run_with_deadline, SolverRun};
pub use types::{InstanceResult, ResultSet, SolverCall, SolverOutput, SolverWitness};
