//! Document tree model for drift.
//!
//! A parsed configuration snapshot is a [`Node`] tree: insertion-ordered
//! mappings, sequences, and scalar leaves. Mapping order is load order, and
//! consumers rely on it: sequence elements are identified by the value of
//! their first key when two snapshots are compared.
//!
//! # Key Types
//!
//! - [`Node`] — tagged union of the three document shapes
//! - [`Scalar`] — opaque leaf value, compared by equality
//! - [`Mapping`] — ordered `key -> Node` collection with unique string keys

pub mod node;

pub use node::{Mapping, Node, Scalar};
