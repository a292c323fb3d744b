//! Command Line Interface (CLI) layer for slim_predict.
//!
//! The library interprets the arguments; this module acts on the result:
//! printing the help texts or a diagnostic, choosing the exit status
//! (`runner`), installing logging keyed by the debug level, and reporting
//! failures that happen after a successful parse (`errors`).
//!
//! If you are embedding the interpreter into another application, call
//! `slim_predict::parse` directly instead.
pub mod errors;
pub mod runner;

pub use runner::{ExitPolicy, run};
