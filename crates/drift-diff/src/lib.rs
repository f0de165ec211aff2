//! Structural diff engine for drift.
//!
//! Compares two parsed configuration documents and reports additions,
//! removals, and value modifications, each keyed by the path at which the
//! difference was found. Nested mappings are compared recursively; sequences
//! are matched as keyed collections of records rather than positionally.
//!
//! The comparison is a pure function of its inputs: no state survives a
//! call, and independent comparisons can run in parallel without
//! coordination.
//!
//! # Key Types
//!
//! - [`DocumentDiff`] / [`Modification`] -- the result of one comparison
//! - [`diff_mappings`] / [`diff_sequences`] -- the comparison entry points
//! - [`DiffError`] -- shape violations in keyed sequences

pub mod compare;
pub mod error;
pub mod result;

pub use compare::{diff_mappings, diff_sequences};
pub use error::{DiffError, DiffOutcome};
pub use result::{DocumentDiff, Modification};
