#![doc = r#"
ldbutil — dump the files of an embedded key-value store as readable text.

This crate routes the output of a storage-file decoder (write-ahead log segments,
sorted tables, manifests) either to the console mirrored into a side file, or into
one file per input under a target directory. The decoder and the filesystem are
pluggable through the [`Decoder`] and [`Env`] traits; the crate ships
[`DefaultEnv`] over `std::fs` and [`RawDecoder`], a hex listing that does not
interpret the file layout.

Dump to the console
-------------------
Each input is rendered to stdout and mirrored into `<input>_output.txt`.

```rust,no_run
use ldbutil::{handle_dump, DefaultEnv, DumpParams, RawDecoder};

let report = handle_dump(
    &DefaultEnv,
    &RawDecoder,
    &["/data/db/000003.log", "/data/db/000005.ldb"],
    &DumpParams::default(),
);
assert!(report.is_success());
```

Dump into a directory
---------------------
Each input is written only to `<target_dir><file name>_output.txt`. The target is
concatenated verbatim, so it should end with a separator.

```rust,no_run
use ldbutil::{handle_dump_to_path, DefaultEnv, DumpParams, RawDecoder};

let report = handle_dump_to_path(
    &DefaultEnv,
    &RawDecoder,
    &["/data/db/000003.log"],
    "/tmp/dump/",
    &DumpParams::default(),
);
println!("processed={} failed={}", report.processed, report.failed);
```

Plugging in a decoder
---------------------
Any closure with the decoder signature works:

```rust,no_run
use ldbutil::{handle_dump, DefaultEnv, DumpParams, Env, Result, Sink};

let decoder = |_env: &dyn Env, path: &str, sink: &mut dyn Sink| -> Result<()> {
    sink.append(format!("--- {path}\n").as_bytes())
};
handle_dump(&DefaultEnv, &decoder, &["000003.log"], &DumpParams::default());
```

Error handling
--------------
Handlers never fail as a whole. Per-file errors ([`Error`]) are printed to stderr,
logged through `tracing`, and counted in the returned [`DumpReport`].

Useful modules
--------------
- [`api`] — the two dump handlers and the [`Decoder`] trait.
- [`io`] — sinks, the filesystem environment and the raw decoder.
- [`core`] — per-run parameters and output path derivation.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;

pub use core::params::{DEFAULT_OUTPUT_SUFFIX, DumpParams};
pub use core::path::bare_filename;
pub use error::{Error, Result};

pub use io::{DefaultEnv, Env, FileSink, MirrorSink, RawDecoder, Sink};

pub use api::{Decoder, DumpReport, handle_dump, handle_dump_to_path};
