//! Collaborator contracts supplied by the hosting page.

use tablekit_model::Value;

use crate::draft::DraftRow;
use crate::pagination::PageRequest;

/// Immediate answer of the update collaborator to an optimistic write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The change is confirmed; the ticket is retired.
    Accepted,
    /// The change is refused; the cell rolls back now.
    Rejected,
    /// The outcome arrives later; the host keeps the ticket and calls
    /// [`Grid::resolve_update`](crate::Grid::resolve_update) when its
    /// request settles.
    Pending,
}

/// Callbacks a hosting page wires into a grid.
///
/// All methods have default implementations, so hosts only override the
/// collaborators they care about. Hooks are invoked synchronously after the
/// grid's own state change and outside its internal lock - a hook may call
/// back into the grid (a page-change hook typically refetches and calls
/// `set_rows`).
pub trait GridHooks: Send + Sync {
    /// The user navigated to another page; refetch and feed back new rows
    /// and totals. Failures are the host's to handle - the grid never
    /// retries.
    fn on_page_change(&self, _request: PageRequest) {}

    /// A changed cell value was optimistically applied to the local row.
    ///
    /// Return [`UpdateOutcome::Rejected`] (or later resolve the ticket as
    /// rejected) to roll the cell back.
    fn on_cell_update(&self, _key: &str, _column: &str, _value: &Value) -> UpdateOutcome {
        UpdateOutcome::Accepted
    }

    /// One draft row is being handed off for creation (per flushed row).
    fn on_add_row(&self, _draft: &DraftRow) {}

    /// The add-row buffer changed; `drafts` is the full current buffer.
    fn on_add_row_data_change(&self, _drafts: &[DraftRow]) {}
}

/// A no-op hook set for grids whose host only drains events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl GridHooks for NoHooks {}
