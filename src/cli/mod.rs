//! Command-line entry points
//!
//! Logic behind the `vavoo-extract` binary, kept in the library so it can be
//! unit tested.

pub mod extract;

pub use extract::{ExtractArgs, run_extract_mode};
