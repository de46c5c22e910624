//! Filesystem access handed to decoders.
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Read-side filesystem access.
///
/// One environment is built per run and passed by reference to every decode
/// call, so decoders never reach for the filesystem directly.
pub trait Env {
    fn file_exists(&self, path: &str) -> bool;

    fn file_size(&self, path: &str) -> Result<u64>;

    /// Opens `path` for sequential reading.
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>>;
}

/// `Env` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnv;

fn read_err(path: &str, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_string(),
        },
        _ => Error::Read {
            path: path.to_string(),
            source,
        },
    }
}

impl Env for DefaultEnv {
    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn file_size(&self, path: &str) -> Result<u64> {
        Ok(fs::metadata(path).map_err(|e| read_err(path, e))?.len())
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let file = File::open(path).map_err(|e| read_err(path, e))?;
        // Opening a directory succeeds on unix; refuse it before any read.
        if file.metadata().map_err(|e| read_err(path, e))?.is_dir() {
            return Err(read_err(path, io::ErrorKind::IsADirectory.into()));
        }
        Ok(Box::new(BufReader::new(file)))
    }
}
