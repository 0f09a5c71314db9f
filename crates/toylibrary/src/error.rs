//! Errors raised by the toy library and its test program.

use thiserror::Error;

/// Errors raised by the toy library.
#[derive(Error, Debug)]
pub enum ToyError {
    /// A parameter was outside the domain the caller allows.
    #[error("ParameterDomainIssue: \"{0}\"")]
    ParameterDomainIssue(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
