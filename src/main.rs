//! ldbutil CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse the arguments, dispatch to the
//! console or target-directory dump, and exit 0 only when every file dumped.
//! For programmatic use, prefer the library handlers (`ldbutil::api`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run(std::env::args_os().skip(1))
}
