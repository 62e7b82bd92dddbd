//! Error types for the designer crate.

use shapekit_core::CoreError;
use thiserror::Error;

/// Errors raised by path editing, shape queries and model mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A core contract violation (shape index out of range, unsupported command).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A path element index did not address a command of the path.
    #[error("Path element {index} out of range for path of {len} commands")]
    ElementOutOfRange { index: usize, len: usize },

    /// The path has no extent, so it cannot be laid out.
    #[error("Path has an empty bounding box")]
    EmptyPath,
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designer_error_display() {
        let err = DesignerError::ElementOutOfRange { index: 9, len: 5 };
        assert_eq!(
            err.to_string(),
            "Path element 9 out of range for path of 5 commands"
        );
        assert_eq!(
            DesignerError::EmptyPath.to_string(),
            "Path has an empty bounding box"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::index_out_of_range("shapes", 3, 1);
        let err: DesignerError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
        assert!(matches!(err, DesignerError::Core(_)));
    }
}
