use std::ffi::OsString;
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ldbutil::{DefaultEnv, DumpParams, RawDecoder, handle_dump, handle_dump_to_path};

use super::args::{Invocation, USAGE};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "LDBUTIL_LOG";

// Off by default: stderr carries the usage text and per-file errors.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_logging();

    let invocation = match Invocation::parse(args) {
        Ok(invocation) => invocation,
        Err(e) => {
            debug!("usage error: {}", e);
            eprint!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let env = DefaultEnv;
    let params = DumpParams::default();
    let report = match &invocation {
        Invocation::Dump { files } => {
            info!("dumping {} file(s) to stdout", files.len());
            handle_dump(&env, &RawDecoder, files.as_slice(), &params)
        }
        Invocation::DumpToPath { files, target_dir } => {
            info!("dumping {} file(s) to {}", files.len(), target_dir);
            handle_dump_to_path(&env, &RawDecoder, files.as_slice(), target_dir, &params)
        }
    };

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
