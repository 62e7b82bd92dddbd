//! Error handling for ShapeKit
//!
//! Errors here describe broken caller contracts: an index that does not
//! address an existing element, or a path command the editing engine does not
//! support. Expected empty results (nothing under the pointer, no selection)
//! are never errors and are modelled with `Option` or result enums instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An index was outside the valid range of a collection
    #[error("Index {index} out of range for {what} of length {len}")]
    IndexOutOfRange {
        /// Name of the collection that was indexed.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// A path command kind that the editing engine cannot represent
    #[error("Unsupported path command: {command}")]
    UnsupportedCommand {
        /// Human readable name of the command.
        command: String,
    },
}

impl CoreError {
    /// Builds an [`CoreError::IndexOutOfRange`] error.
    pub fn index_out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        CoreError::IndexOutOfRange { what, index, len }
    }

    /// Check if this is an index error
    pub fn is_index_error(&self) -> bool {
        matches!(self, CoreError::IndexOutOfRange { .. })
    }
}

/// Result type using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
