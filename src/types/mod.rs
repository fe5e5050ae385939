//! Type definitions for the extractor
//!
//! This module contains the main data structures used for requests and responses.

pub mod request;
pub mod response;

pub use request::ExtractOptions;
pub use response::{ErrorResponse, RelayMode, ResolutionResult};
