//! Append-only output sinks handed to the decoder.
//!
//! A sink owns its output handles from construction until it is dropped.
//! `append` hands every byte to the OS before returning, so a write failure is
//! reported to the caller instead of surfacing at drop time.
use std::fs::File;
use std::io::{self, Stdout, Write};

use crate::error::{Error, Result};

/// Destination for decoded text.
///
/// `close`, `flush` and `sync` only signal intent; the owned handles are
/// released when the sink goes out of scope.
pub trait Sink {
    /// Writes all of `data` or fails.
    fn append(&mut self, data: &[u8]) -> Result<()>;

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        Ok(())
    }
}

fn create_output(path: &str) -> Result<File> {
    File::create(path).map_err(|source| Error::SinkOpen {
        path: path.to_string(),
        source,
    })
}

/// Writes every append to a console stream and then to a file.
pub struct MirrorSink<W: Write> {
    path: String,
    console: W,
    file: File,
}

impl MirrorSink<Stdout> {
    /// Mirrors to the process's standard output and to `path`.
    pub fn console(path: &str) -> Result<Self> {
        Self::new(path, io::stdout())
    }
}

impl<W: Write> MirrorSink<W> {
    /// Opens `path` for writing, truncating existing content.
    pub fn new(path: &str, console: W) -> Result<Self> {
        Ok(Self {
            path: path.to_string(),
            console,
            file: create_output(path)?,
        })
    }

    fn write_err(&self, source: io::Error) -> Error {
        Error::Sink {
            path: self.path.clone(),
            source,
        }
    }
}

impl<W: Write> Sink for MirrorSink<W> {
    fn append(&mut self, data: &[u8]) -> Result<()> {
        self.console
            .write_all(data)
            .and_then(|()| self.console.flush())
            .map_err(|e| self.write_err(e))?;
        self.file.write_all(data).map_err(|e| self.write_err(e))
    }
}

/// Writes every append to a file only.
pub struct FileSink {
    path: String,
    file: File,
}

impl FileSink {
    /// Opens `path` for writing, truncating existing content.
    pub fn create(path: &str) -> Result<Self> {
        Ok(Self {
            path: path.to_string(),
            file: create_output(path)?,
        })
    }
}

impl Sink for FileSink {
    fn append(&mut self, data: &[u8]) -> Result<()> {
        self.file.write_all(data).map_err(|source| Error::Sink {
            path: self.path.clone(),
            source,
        })
    }
}
