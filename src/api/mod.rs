//! Dump handlers: run a decoder over a batch of input files, one sink per file.
//!
//! Both handlers process inputs strictly in order and never stop early. A file
//! whose output cannot be opened, or whose decode fails, is reported on stderr
//! and counted in the returned [`DumpReport`]; the next file is processed
//! regardless.
use tracing::{debug, info, warn};

use crate::core::params::DumpParams;
use crate::core::path::{console_output_path, redirect_output_path};
use crate::error::Result;
use crate::io::env::Env;
use crate::io::sink::{FileSink, MirrorSink, Sink};

/// Renders one input file into text written through a [`Sink`].
pub trait Decoder {
    fn decode(&self, env: &dyn Env, path: &str, sink: &mut dyn Sink) -> Result<()>;
}

impl<F> Decoder for F
where
    F: Fn(&dyn Env, &str, &mut dyn Sink) -> Result<()>,
{
    fn decode(&self, env: &dyn Env, path: &str, sink: &mut dyn Sink) -> Result<()> {
        self(env, path, sink)
    }
}

/// Batch dump report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpReport {
    pub processed: usize,
    pub failed: usize,
}

impl DumpReport {
    /// True when no file failed. An empty batch is a success.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, input: &str, outcome: Result<()>) {
        match outcome {
            Ok(()) => {
                debug!("dumped {}", input);
                self.processed += 1;
            }
            Err(e) => {
                eprintln!("{}", e);
                warn!("failed to dump {}: {}", input, e);
                self.failed += 1;
            }
        }
    }
}

/// Dumps each file to stdout, mirrored into `<file><suffix>`.
pub fn handle_dump<S: AsRef<str>>(
    env: &dyn Env,
    decoder: &dyn Decoder,
    files: &[S],
    params: &DumpParams,
) -> DumpReport {
    let mut report = DumpReport::default();
    for input in files.iter().map(AsRef::as_ref) {
        let output = console_output_path(input, &params.suffix);
        debug!("dumping {} -> stdout + {}", input, output);
        let outcome = MirrorSink::console(&output)
            .and_then(|mut sink| decoder.decode(env, input, &mut sink));
        report.record(input, outcome);
    }
    info!(
        "dump complete: processed={} failed={}",
        report.processed, report.failed
    );
    report
}

/// Dumps each file into `<target_dir><bare filename><suffix>` without touching stdout.
pub fn handle_dump_to_path<S: AsRef<str>>(
    env: &dyn Env,
    decoder: &dyn Decoder,
    files: &[S],
    target_dir: &str,
    params: &DumpParams,
) -> DumpReport {
    let mut report = DumpReport::default();
    for input in files.iter().map(AsRef::as_ref) {
        let output = redirect_output_path(target_dir, input, &params.suffix);
        debug!("dumping {} -> {}", input, output);
        let outcome =
            FileSink::create(&output).and_then(|mut sink| decoder.decode(env, input, &mut sink));
        report.record(input, outcome);
    }
    info!(
        "dump to {} complete: processed={} failed={}",
        target_dir, report.processed, report.failed
    );
    report
}
