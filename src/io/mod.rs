//! I/O layer: output sinks, filesystem environment and the raw hex decoder.
pub mod env;
pub use env::{DefaultEnv, Env};

pub mod sink;
pub use sink::{FileSink, MirrorSink, Sink};

pub mod hexdump;
pub use hexdump::RawDecoder;
