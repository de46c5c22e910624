//! Command line layer for `ldbutil`.
//!
//! `args` turns the raw argument list into an [`args::Invocation`], `errors` holds
//! the usage error, and `runner` wires logging, the environment and the
//! decoder to the library handlers and maps the outcome to an exit code.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
