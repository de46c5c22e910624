use std::ffi::OsString;

use clap::Parser;

use super::errors::UsageError;

/// Followed by the target directory; the pair must close the argument list.
pub const PATH_SELECTOR: &str = "--path";

pub const USAGE: &str = "\
Usage: ldbutil command...
   --dump files...                    -- dump contents of specified files
   --dump files... --path filepath    -- dump contents to target path

eg. ldbutil --dump /data/db/000003.log --path /tmp/output/
";

/// Raw command line. `--dump` swallows every following argument, including
/// ones that start with `-`; the trailing `--path <dir>` pair is split off
/// afterwards by [`Invocation::parse`].
#[derive(Parser, Debug)]
#[command(name = "ldbutil", no_binary_name = true, disable_help_flag = true)]
pub struct CliArgs {
    /// Files to dump, optionally followed by `--path <dir>`
    #[arg(long, num_args = 0.., allow_hyphen_values = true, required = true)]
    pub dump: Vec<String>,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `--dump files...`: print to stdout, mirrored into `<file>_output.txt`
    Dump { files: Vec<String> },
    /// `--dump files... --path dir`: write `<dir><file name>_output.txt` only
    DumpToPath { files: Vec<String>, target_dir: String },
}

impl Invocation {
    /// Parses the arguments that follow the program name.
    pub fn parse<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args)?;
        Self::from_dump_args(cli.dump)
    }

    fn from_dump_args(args: Vec<String>) -> Result<Self, UsageError> {
        match args.as_slice() {
            [files @ .., selector, target_dir] if selector == PATH_SELECTOR => {
                if files.is_empty() {
                    return Err(UsageError::NoInputFiles);
                }
                Ok(Invocation::DumpToPath {
                    files: files.to_vec(),
                    target_dir: target_dir.clone(),
                })
            }
            files => Ok(Invocation::Dump {
                files: files.to_vec(),
            }),
        }
    }
}
