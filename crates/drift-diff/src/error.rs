//! Error types for the diff crate.

use thiserror::Error;

/// Shape violations encountered while comparing keyed sequences.
///
/// Sequences are matched as keyed collections of records, so every element
/// must be a non-empty mapping whose first value is a scalar. A violation
/// aborts the whole comparison; elements are never silently skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// A sequence element is not a mapping at all.
    #[error("sequence element under {path} is not a record: found a {kind}")]
    NotARecord { path: String, kind: &'static str },

    /// A sequence element is a mapping with no keys, so nothing identifies it.
    #[error("sequence element under {path} has no keys to identify it by")]
    UnkeyedRecord { path: String },

    /// The first value of a sequence element is itself a container.
    #[error("sequence element under {path} has a non-scalar identity value")]
    CompositeIdentity { path: String },
}

/// Convenience alias for comparison results.
pub type DiffOutcome<T> = Result<T, DiffError>;
