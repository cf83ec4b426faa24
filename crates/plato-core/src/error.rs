//! Error types for operation construction.

use thiserror::Error;

/// Errors raised while constructing operations from unchecked input.
///
/// Pushing onto a `Delta` never fails; these only surface from the
/// fallible constructors that accept signed lengths or arbitrary JSON
/// embed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    #[error("Negative length for {op}: {length}")]
    NegativeLength { op: &'static str, length: i64 },

    #[error("Unsupported embed value: {0}")]
    UnsupportedEmbed(String),
}

pub type Result<T> = std::result::Result<T, DeltaError>;
