//! Grid controller errors.

use tablekit_model::EditError;

/// Caller-misuse errors returned by grid entry points.
///
/// External failures (a rejected update, a failed page fetch) are never
/// errors at this layer - they surface as rollback and events. A row
/// without a key is a warning event, not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// No leaf column carries the given accessor key.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    /// The column exists but is hidden or carries no editor.
    #[error("column '{column}' is not editable")]
    NotEditable { column: String },

    /// The grid was configured without inline editing.
    #[error("inline editing is disabled for this grid")]
    EditingDisabled,

    /// A cursor target outside the row or draft range.
    #[error("row {index} is out of bounds")]
    RowOutOfBounds { index: usize },

    /// An edit operation was called while no cell is in edit mode.
    #[error("no cell is in edit mode")]
    NoActiveEdit,

    /// Raw editor input failed to parse; the edit cursor stays open.
    #[error(transparent)]
    Parse(#[from] EditError),
}
