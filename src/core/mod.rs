//! Core building blocks shared by the handlers: per-run parameters and
//! output path derivation.
pub mod params;
pub mod path;
