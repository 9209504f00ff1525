//! Events emitted by the grid and drained by the host.

use tablekit_model::Value;
use uuid::Uuid;

use crate::editing::RowAt;

/// A non-fatal condition surfaced to the user by the hosting page
/// (toast-style), not by the grid itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridWarning {
    /// A submit targeted a row without a resolvable key; the update
    /// collaborator was not called.
    MissingRowKey { row_index: usize },
}

/// State-change notifications.
///
/// The grid queues events as its entry points run; the host drains them
/// with [`Grid::take_events`](crate::Grid::take_events) after each input
/// and reacts (enable toolbar buttons, refetch, show a toast, re-render).
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Selection changed; every deselect is listed individually.
    SelectionChanged {
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// The active page index changed.
    PageChanged { page_index: usize },
    /// A cell entered edit mode.
    EditStarted { row: RowAt, column: String },
    /// An edit was abandoned without persisting a value.
    EditCanceled { row: RowAt, column: String },
    /// A cell value was optimistically applied to the local row.
    CellUpdated {
        key: String,
        column: String,
        value: Value,
    },
    /// A rejected update was rolled back to its previous value.
    CellRolledBack {
        key: String,
        column: String,
        value: Value,
    },
    /// Sort state changed (the host sorts or refetches the data).
    SortChanged { column: String, ascending: bool },
    /// A draft row was appended to the add-row buffer.
    DraftAdded { rid: Uuid },
    /// A draft row's cell changed.
    DraftChanged { rid: Uuid, column: String },
    /// A draft row was removed from the buffer.
    DraftRemoved { rid: Uuid },
    /// The buffer was handed to the creation collaborator (not cleared).
    DraftsFlushed { count: usize },
    /// The buffer was explicitly emptied.
    DraftsCleared,
    /// A warning for the host to surface.
    Warning(GridWarning),
}
