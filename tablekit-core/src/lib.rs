//! Headless tabular data-grid controller
//!
//! One [`Grid`] per listing page: it owns selection, pagination state, the
//! inline-edit session and the add-row buffer, and forwards every
//! persistence-relevant change to collaborators supplied by the hosting
//! page via [`GridHooks`]. Rendering, fetching and business rules stay with
//! the host.

pub mod draft;
pub mod editing;
pub mod error;
pub mod events;
pub mod filter;
pub mod grid;
pub mod hooks;
pub mod pagination;
pub mod selection;

pub use draft::DraftRow;
pub use editing::{EditCursor, RowAt, TabDirection, UpdateTicket};
pub use error::GridError;
pub use events::{GridEvent, GridWarning};
pub use filter::FilterMatch;
pub use grid::{DEFAULT_PAGE_SIZE, Grid, GridConfig, GridId, SubmitOutcome};
pub use hooks::{GridHooks, NoHooks, UpdateOutcome};
pub use pagination::{PageRequest, Pager};
pub use selection::{Selection, SelectionMode};

pub mod prelude {
    pub use crate::draft::DraftRow;
    pub use crate::editing::{EditCursor, RowAt, TabDirection, UpdateTicket};
    pub use crate::error::GridError;
    pub use crate::events::{GridEvent, GridWarning};
    pub use crate::grid::{Grid, GridConfig, GridId, SubmitOutcome};
    pub use crate::hooks::{GridHooks, NoHooks, UpdateOutcome};
    pub use crate::pagination::PageRequest;
    pub use crate::selection::{Selection, SelectionMode};

    pub use tablekit_model::{
        Alignment, Column, Editor, GridRow, Record, SelectOption, Value,
    };
}
