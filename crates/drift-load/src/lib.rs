//! YAML snapshot loading for drift.
//!
//! Parses configuration files into [`drift_types::Node`] trees. Key order in
//! the source document is preserved end to end; the comparison engine
//! identifies sequence elements by their first key, so this ordering is a
//! guarantee of the loader, not an accident.
//!
//! The entry point of a comparison is a mapping, so loading rejects
//! documents whose top level is anything else (an empty document parses as
//! null and is rejected the same way).

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{load_document, parse_document};
