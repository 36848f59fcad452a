//! Error taxonomy. All failures are local: the host buffer is never mutated
//! on error, and a second invocation is the only retry policy needed.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The target line does not match a function-declaration pattern.
    #[error("no function signature found")]
    NoSignature,

    /// The language identifier has no configured wrapper pair.
    #[error("unsupported language: {0}")]
    UnsupportedDialect(String),
}
