//! Error types for diagram rendering.
//!
//! Declaring a diagram is infallible; every fallible operation in this crate
//! happens during rendering, between validating the style configuration and
//! writing the output file. [`RenderError`] covers that pipeline.

use std::io;

use thiserror::Error;

/// Errors that can occur while rendering a diagram to a file.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Reading or writing a file failed, most commonly because the output
    /// path is not writable.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration value could not be parsed or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Graphviz `dot` executable could not be found.
    #[error("Graphviz backend not available: {0}")]
    BackendMissing(String),

    /// The Graphviz backend ran but failed to produce output.
    #[error("Graphviz rendering failed: {0}")]
    Backend(String),
}
