//! External process invocation
//!
//! Runs `<interpreter> <script> [args...]` without a shell, buffers stdout and
//! stderr to completion, and folds every outcome (spawn failure, non-zero
//! exit, output) into an [`InvocationReport`]. The only error surfaced to the
//! caller is an interpreter that does not resolve, detected before spawning.

mod interpreter;
mod process;
mod report;


pub use interpreter::resolve_interpreter;
pub use process::ProcessInvoker;
pub use report::InvocationReport;
