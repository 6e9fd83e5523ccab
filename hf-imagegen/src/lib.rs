//! Blocking client for hosted text-to-image inference endpoints.
//!
//! A [`Client`] posts `{"inputs": <prompt>}` to the configured model endpoint
//! and either reports the raw response ([`Client::probe`]) or decodes the
//! returned bytes and saves them as an image ([`Client::generate`]).

mod client;
mod config;
mod error;
pub mod output;
mod report;

pub use crate::client::{Client, GenerationRequest, SavedImage};
pub use crate::config::{
    Config, DEFAULT_ENDPOINT, DEFAULT_GENERATE_TIMEOUT, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
    DEFAULT_PROBE_TIMEOUT, MODEL_PLACEHOLDER,
};
pub use crate::error::{ErrorKind, GenerationError as Error, Result};
pub use crate::output::{normalize_filename, OutputFormat};
pub use crate::report::DiagnosticReport;
