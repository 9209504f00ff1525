//! The grid state store: one instance per listing page.

use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use tablekit_model::{Column, ColumnSet, GridRow, Record, Value};
use uuid::Uuid;

use crate::draft::{DraftBuffer, DraftRow};
use crate::editing::{EditCursor, EditSession, RowAt, TabDirection, UpdateTicket, tab_target};
use crate::error::GridError;
use crate::events::{GridEvent, GridWarning};
use crate::filter::{FilterMatch, fuzzy_filter};
use crate::hooks::{GridHooks, UpdateOutcome};
use crate::pagination::{PageRequest, Pager};
use crate::selection::{Selection, SelectionMode};

/// Default rows per page, matching the listing pages' usual size.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Configuration for a grid instance.
///
/// # Example
///
/// ```ignore
/// let grid: Grid<Record> = Grid::new(
///     GridConfig::new(columns)
///         .page_size(50)
///         .selection_mode(SelectionMode::Single)
///         .editable()
///         .hooks(Arc::new(PageHooks::new(client))),
/// );
/// ```
pub struct GridConfig {
    columns: Vec<Column>,
    page_size: usize,
    selection_mode: SelectionMode,
    editable: bool,
    default_draft_values: Record,
    hooks: Option<Arc<dyn GridHooks>>,
}

impl GridConfig {
    /// Start a configuration from column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            page_size: DEFAULT_PAGE_SIZE,
            selection_mode: SelectionMode::None,
            editable: false,
            default_draft_values: Record::new(),
            hooks: None,
        }
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the selection mode.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Enable inline editing.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Seed values for new draft rows.
    pub fn default_draft_values(mut self, defaults: Record) -> Self {
        self.default_draft_values = defaults;
        self
    }

    /// Wire in the page's collaborators.
    pub fn hooks(mut self, hooks: Arc<dyn GridHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }
}

/// Internal state for a grid.
struct GridInner<R: GridRow> {
    columns: ColumnSet,
    rows: Vec<R>,
    selection: Selection,
    pager: Pager,
    session: EditSession,
    drafts: DraftBuffer,
    /// App-controlled sort state (column id, ascending). The store records
    /// it; the host sorts or refetches the data.
    sort: Option<(String, bool)>,
    editable: bool,
    defaults: Record,
    events: VecDeque<GridEvent>,
}

impl<R: GridRow> GridInner<R> {
    fn push(&mut self, event: GridEvent) {
        self.events.push_back(event);
    }

    /// Cancel the active edit, emitting cancel semantics for it.
    fn cancel_active_edit(&mut self) {
        if let Some(cursor) = self.session.clear() {
            self.push(GridEvent::EditCanceled {
                row: cursor.row,
                column: cursor.column,
            });
        }
    }
}

/// Outcome of submitting a cell edit.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Value equal to the current cell value; no collaborator invoked.
    Unchanged,
    /// Row had no resolvable key; warned and aborted, cursor cleared.
    MissingKey,
    /// Draft cell updated locally; only the buffer-change hook fired.
    DraftUpdated,
    /// The update collaborator accepted the change.
    Accepted,
    /// The update collaborator rejected the change; the cell rolled back.
    Rejected,
    /// Outcome pending; pass the ticket to [`Grid::resolve_update`] once
    /// the collaborator's request settles.
    Pending(UpdateTicket),
}

/// The tabular data-grid controller.
///
/// One `Grid` per listing page. It composes the selection manager,
/// pagination coordinator, inline-edit session and add-row buffer over the
/// current page of rows, and forwards every externally-relevant change to
/// the page's [`GridHooks`]. The handle is cheap to clone; clones share
/// state.
///
/// The grid holds no persistent state and performs no I/O: hosts feed rows
/// in with [`Grid::set_rows`] and react to [`GridEvent`]s drained from
/// [`Grid::take_events`].
pub struct Grid<R: GridRow> {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    inner: Arc<RwLock<GridInner<R>>>,
    /// Dirty flag for re-render scheduling.
    dirty: Arc<AtomicBool>,
    /// Page-supplied collaborators, invoked outside the state lock.
    hooks: Option<Arc<dyn GridHooks>>,
}

impl<R: GridRow> Grid<R> {
    /// Create a grid from configuration.
    pub fn new(config: GridConfig) -> Self {
        let inner = GridInner {
            columns: ColumnSet::new(config.columns),
            rows: Vec::new(),
            selection: Selection::new(config.selection_mode),
            pager: Pager::new(config.page_size),
            session: EditSession::default(),
            drafts: DraftBuffer::default(),
            sort: None,
            editable: config.editable,
            defaults: config.default_draft_values,
            events: VecDeque::new(),
        };
        Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
            hooks: config.hooks,
        }
    }

    /// Create a grid with an initial page of rows.
    pub fn with_rows(config: GridConfig, rows: Vec<R>) -> Self {
        let grid = Self::new(config);
        grid.write().rows = rows;
        grid
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    // Hosts are single-threaded; a poisoned lock just hands back the inner
    // state untouched.
    fn read(&self) -> RwLockReadGuard<'_, GridInner<R>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridInner<R>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Number of rows on the current page.
    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    /// Check if the current page is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<R> {
        self.read().rows.get(index).cloned()
    }

    /// Get all rows of the current page.
    pub fn rows(&self) -> Vec<R> {
        self.read().rows.clone()
    }

    /// Find a row by key.
    pub fn find_row(&self, key: &str) -> Option<(usize, R)> {
        let guard = self.read();
        guard
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.key().as_deref() == Some(key))
            .map(|(i, row)| (i, row.clone()))
    }

    /// Replace the current page of rows (after a fetch).
    ///
    /// Selected keys no longer present in the new rows are dropped and
    /// reported through a `SelectionChanged` event; an edit cursor pointing
    /// past the new row range is canceled.
    pub fn set_rows(&self, rows: Vec<R>) {
        {
            let mut guard = self.write();
            guard.rows = rows;
            let known: HashSet<String> = guard.rows.iter().filter_map(|r| r.key()).collect();
            let removed = guard.selection.retain_known(&known);
            if !removed.is_empty() {
                guard.push(GridEvent::SelectionChanged {
                    added: vec![],
                    removed,
                });
            }
            let edit_gone = matches!(
                guard.session.cursor(),
                Some(EditCursor { row: RowAt::Body(index), .. }) if *index >= guard.rows.len()
            );
            if edit_gone {
                guard.cancel_active_edit();
            }
        }
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.read().selection.mode()
    }

    /// Change the selection mode, clearing any existing selection.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        {
            let mut guard = self.write();
            let removed = guard.selection.set_mode(mode);
            if !removed.is_empty() {
                guard.push(GridEvent::SelectionChanged {
                    added: vec![],
                    removed,
                });
            }
        }
        self.mark_dirty();
    }

    /// Toggle selection of a row by key.
    ///
    /// Returns `(added, removed)` keys. In single-select mode, selecting a
    /// new row reports the previous row's removal in the same call.
    pub fn toggle_row_selection(&self, key: &str) -> (Vec<String>, Vec<String>) {
        let result = {
            let mut guard = self.write();
            let (added, removed) = guard.selection.toggle(key);
            if !added.is_empty() || !removed.is_empty() {
                guard.push(GridEvent::SelectionChanged {
                    added: added.clone(),
                    removed: removed.clone(),
                });
            }
            (added, removed)
        };
        self.mark_dirty();
        result
    }

    /// Select every row on the current page (multi-select only).
    ///
    /// Rows without a key cannot be selected and are skipped.
    pub fn select_all(&self) -> Vec<String> {
        let added = {
            let mut guard = self.write();
            let keys: Vec<String> = guard.rows.iter().filter_map(|r| r.key()).collect();
            let keyless = guard.rows.len() - keys.len();
            if keyless > 0 {
                debug!("select_all skipping {keyless} rows without keys");
            }
            let added = guard.selection.select_all(&keys);
            if !added.is_empty() {
                guard.push(GridEvent::SelectionChanged {
                    added: added.clone(),
                    removed: vec![],
                });
            }
            added
        };
        self.mark_dirty();
        added
    }

    /// Clear all selection.
    pub fn clear_selection(&self) -> Vec<String> {
        let removed = {
            let mut guard = self.write();
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                guard.push(GridEvent::SelectionChanged {
                    added: vec![],
                    removed: removed.clone(),
                });
            }
            removed
        };
        self.mark_dirty();
        removed
    }

    /// Get all selected keys (sorted).
    pub fn selected_keys(&self) -> Vec<String> {
        self.read().selection.selected()
    }

    /// Check if a row is selected by key.
    pub fn is_selected(&self, key: &str) -> bool {
        self.read().selection.is_selected(key)
    }

    /// Get all selected rows of the current page.
    pub fn selected_rows(&self) -> Vec<R> {
        let guard = self.read();
        guard
            .rows
            .iter()
            .filter(|row| {
                row.key()
                    .is_some_and(|key| guard.selection.is_selected(&key))
            })
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page (0-based).
    pub fn page_index(&self) -> usize {
        self.read().pager.page_index()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.read().pager.page_size()
    }

    /// Number of pages (server-supplied or derived).
    pub fn page_count(&self) -> usize {
        self.read().pager.page_count()
    }

    /// Total element count across all pages.
    pub fn total_elements(&self) -> usize {
        self.read().pager.total_elements()
    }

    /// Update the total element count (from a fetch response).
    pub fn set_total_elements(&self, total: usize) {
        self.write().pager.set_total_elements(total);
        self.mark_dirty();
    }

    /// Set or clear the server-computed page count.
    pub fn set_server_page_count(&self, count: Option<usize>) {
        self.write().pager.set_server_page_count(count);
        self.mark_dirty();
    }

    /// Navigate to a page.
    ///
    /// Emits `PageChanged` and invokes the `on_page_change` hook; the index
    /// is not validated against the page count (an out-of-range fetch is
    /// expected to come back empty). The grid does not fetch anything.
    pub fn set_page_index(&self, index: usize) {
        let changed = {
            let mut guard = self.write();
            let changed = guard.pager.set_page_index(index);
            if changed {
                guard.push(GridEvent::PageChanged { page_index: index });
            }
            changed
        };
        if changed {
            self.mark_dirty();
            if let Some(hooks) = &self.hooks {
                hooks.on_page_change(PageRequest { page_index: index });
            }
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort state (column id, ascending).
    pub fn sort(&self) -> Option<(String, bool)> {
        self.read().sort.clone()
    }

    /// Toggle sort for a column.
    ///
    /// A newly sorted column starts ascending; toggling the same column
    /// flips direction. Only sortable leaf columns respond; the rows are
    /// not reordered here - the host sorts or refetches on `SortChanged`.
    pub fn toggle_sort(&self, column: &str) -> Option<(String, bool)> {
        let result = {
            let mut guard = self.write();
            if !guard.columns.leaf(column).is_some_and(|c| c.sortable) {
                return None;
            }
            let ascending = match &guard.sort {
                Some((current, asc)) if current == column => !*asc,
                _ => true,
            };
            guard.sort = Some((column.to_string(), ascending));
            guard.push(GridEvent::SortChanged {
                column: column.to_string(),
                ascending,
            });
            Some((column.to_string(), ascending))
        };
        self.mark_dirty();
        result
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Top-level column definitions (groups included).
    pub fn columns(&self) -> Vec<Column> {
        self.read().columns.columns().to_vec()
    }

    /// Flattened leaf columns in display order.
    pub fn leaf_columns(&self) -> Vec<Column> {
        self.read().columns.leaves().into_iter().cloned().collect()
    }

    /// Visible leaf columns in display order.
    pub fn visible_leaf_columns(&self) -> Vec<Column> {
        self.read()
            .columns
            .visible_leaves()
            .into_iter()
            .cloned()
            .collect()
    }

    /// X-offsets of visible leaves, for column sizing in the render layer.
    pub fn column_offsets(&self) -> Vec<(String, u16)> {
        self.read().columns.offsets().to_vec()
    }

    /// Sum of visible leaf widths.
    pub fn total_width(&self) -> u16 {
        self.read().columns.total_width()
    }

    /// Replace the column definitions.
    ///
    /// An active edit is canceled: its column may be gone.
    pub fn set_columns(&self, columns: Vec<Column>) {
        {
            let mut guard = self.write();
            guard.cancel_active_edit();
            guard.columns.set_columns(columns);
        }
        self.mark_dirty();
    }

    /// Resize a leaf column. Returns `false` for unknown ids.
    pub fn set_column_width(&self, id: &str, width: u16) -> bool {
        let changed = self.write().columns.set_width(id, width);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Show or hide a leaf column. Returns `false` for unknown ids.
    ///
    /// Hiding the column currently being edited cancels the edit.
    pub fn set_column_visible(&self, id: &str, visible: bool) -> bool {
        let changed = {
            let mut guard = self.write();
            let changed = guard.columns.set_visible(id, visible);
            if changed
                && !visible
                && guard.session.cursor().is_some_and(|c| c.column == id)
            {
                guard.cancel_active_edit();
            }
            changed
        };
        if changed {
            self.mark_dirty();
        }
        changed
    }

    // -------------------------------------------------------------------------
    // Inline editing
    // -------------------------------------------------------------------------

    /// The cell currently in edit mode, if any.
    pub fn editing_cell(&self) -> Option<EditCursor> {
        self.read().session.cursor().cloned()
    }

    /// Put a cell into edit mode.
    ///
    /// Any prior uncommitted edit is abandoned with cancel semantics; its
    /// value is not persisted.
    pub fn begin_edit(&self, row: RowAt, column: &str) -> Result<(), GridError> {
        {
            let mut guard = self.write();
            if !guard.editable {
                return Err(GridError::EditingDisabled);
            }
            let leaf = guard
                .columns
                .leaf(column)
                .ok_or_else(|| GridError::UnknownColumn {
                    column: column.to_string(),
                })?;
            if !leaf.is_editable() || !leaf.visible {
                return Err(GridError::NotEditable {
                    column: column.to_string(),
                });
            }
            match row {
                RowAt::Body(index) if index >= guard.rows.len() => {
                    return Err(GridError::RowOutOfBounds { index });
                }
                RowAt::Draft(index) if index >= guard.drafts.len() => {
                    return Err(GridError::RowOutOfBounds { index });
                }
                _ => {}
            }
            let cursor = EditCursor {
                row,
                column: column.to_string(),
            };
            if let Some(abandoned) = guard.session.begin(cursor.clone()) {
                guard.push(GridEvent::EditCanceled {
                    row: abandoned.row,
                    column: abandoned.column,
                });
            }
            guard.push(GridEvent::EditStarted {
                row: cursor.row,
                column: cursor.column,
            });
        }
        self.mark_dirty();
        Ok(())
    }

    /// Abandon the active edit without persisting a value.
    pub fn cancel_edit(&self) {
        {
            let mut guard = self.write();
            guard.cancel_active_edit();
        }
        self.mark_dirty();
    }

    /// Move the edit cursor to the next/previous editable visible leaf
    /// column, wrapping at the ends.
    ///
    /// The current cell is not committed - callers submit first when they
    /// want the value persisted.
    pub fn tab_navigate(&self, direction: TabDirection) -> Result<(), GridError> {
        {
            let mut guard = self.write();
            let Some(cursor) = guard.session.cursor().cloned() else {
                return Err(GridError::NoActiveEdit);
            };
            let editable = guard.columns.editable_leaf_ids();
            let Some(target) = tab_target(&editable, &cursor.column, direction) else {
                debug!("tab navigation with no editable columns");
                return Ok(());
            };
            let next = EditCursor {
                row: cursor.row,
                column: target,
            };
            if let Some(abandoned) = guard.session.begin(next.clone()) {
                guard.push(GridEvent::EditCanceled {
                    row: abandoned.row,
                    column: abandoned.column,
                });
            }
            guard.push(GridEvent::EditStarted {
                row: next.row,
                column: next.column,
            });
        }
        self.mark_dirty();
        Ok(())
    }

    /// Submit raw editor input for the cell in edit mode.
    ///
    /// The input is parsed by the column's editor (a parse failure returns
    /// an error and leaves the cursor open). An unchanged value closes the
    /// cursor without touching the update collaborator. For body rows the
    /// change is applied optimistically and `on_cell_update` decides its
    /// fate; draft rows accumulate locally and only notify
    /// `on_add_row_data_change`.
    pub fn submit_edit(&self, raw: &str) -> Result<SubmitOutcome, GridError> {
        enum After {
            Done(SubmitOutcome),
            DraftChanged(Vec<DraftRow>),
            CallUpdate {
                ticket: UpdateTicket,
                value: Value,
            },
        }

        let after = {
            let mut guard = self.write();
            let Some(cursor) = guard.session.cursor().cloned() else {
                return Err(GridError::NoActiveEdit);
            };
            let editor = guard
                .columns
                .leaf(&cursor.column)
                .ok_or_else(|| GridError::UnknownColumn {
                    column: cursor.column.clone(),
                })?
                .editor
                .clone()
                .ok_or_else(|| GridError::NotEditable {
                    column: cursor.column.clone(),
                })?;
            // Parse before committing to anything: a validation failure
            // keeps the user in the cell.
            let value = editor.parse(raw)?;

            match cursor.row {
                RowAt::Draft(index) => {
                    let Some(draft) = guard.drafts.get_mut(index) else {
                        guard.cancel_active_edit();
                        self.mark_dirty();
                        return Err(GridError::RowOutOfBounds { index });
                    };
                    let previous = draft
                        .record()
                        .get(&cursor.column)
                        .cloned()
                        .unwrap_or(Value::Null);
                    if previous == value {
                        guard.session.clear();
                        After::Done(SubmitOutcome::Unchanged)
                    } else {
                        let rid = draft.rid();
                        draft.record_mut().insert(cursor.column.clone(), value);
                        guard.session.clear();
                        guard.push(GridEvent::DraftChanged {
                            rid,
                            column: cursor.column.clone(),
                        });
                        After::DraftChanged(guard.drafts.rows().to_vec())
                    }
                }
                RowAt::Body(index) => {
                    let Some(row) = guard.rows.get_mut(index) else {
                        guard.cancel_active_edit();
                        self.mark_dirty();
                        return Err(GridError::RowOutOfBounds { index });
                    };
                    let Some(key) = row.key() else {
                        warn!("cell submit on row {index} without a key; update skipped");
                        guard.session.clear();
                        guard.push(GridEvent::Warning(GridWarning::MissingRowKey {
                            row_index: index,
                        }));
                        self.mark_dirty();
                        return Ok(SubmitOutcome::MissingKey);
                    };
                    let previous = row.get(&cursor.column).unwrap_or(Value::Null);
                    if previous == value {
                        guard.session.clear();
                        After::Done(SubmitOutcome::Unchanged)
                    } else {
                        row.set(&cursor.column, value.clone());
                        guard.session.clear();
                        guard.push(GridEvent::CellUpdated {
                            key: key.clone(),
                            column: cursor.column.clone(),
                            value: value.clone(),
                        });
                        let ticket = guard.session.issue(&key, &cursor.column, previous);
                        After::CallUpdate { ticket, value }
                    }
                }
            }
        };
        self.mark_dirty();

        match after {
            After::Done(outcome) => Ok(outcome),
            After::DraftChanged(drafts) => {
                if let Some(hooks) = &self.hooks {
                    hooks.on_add_row_data_change(&drafts);
                }
                Ok(SubmitOutcome::DraftUpdated)
            }
            After::CallUpdate { ticket, value } => {
                let outcome = match &self.hooks {
                    Some(hooks) => hooks.on_cell_update(ticket.row_key(), ticket.column(), &value),
                    None => UpdateOutcome::Accepted,
                };
                match outcome {
                    UpdateOutcome::Accepted => {
                        self.write().session.settle(&ticket);
                        Ok(SubmitOutcome::Accepted)
                    }
                    UpdateOutcome::Rejected => {
                        self.apply_rejection(ticket);
                        Ok(SubmitOutcome::Rejected)
                    }
                    UpdateOutcome::Pending => Ok(SubmitOutcome::Pending(ticket)),
                }
            }
        }
    }

    /// Settle a pending update ticket.
    ///
    /// `accepted == false` rolls the cell back to the ticket's previous
    /// value - unless a newer submit superseded the ticket, in which case
    /// the stale rejection is dropped.
    pub fn resolve_update(&self, ticket: UpdateTicket, accepted: bool) {
        if accepted {
            self.write().session.settle(&ticket);
        } else {
            self.apply_rejection(ticket);
        }
    }

    fn apply_rejection(&self, ticket: UpdateTicket) {
        {
            let mut guard = self.write();
            if !guard.session.is_latest(&ticket) {
                debug!(
                    "stale rejection for {}.{} dropped",
                    ticket.row_key(),
                    ticket.column()
                );
                return;
            }
            guard.session.settle(&ticket);
            let target = guard
                .rows
                .iter_mut()
                .find(|row| row.key().as_deref() == Some(ticket.row_key()));
            match target {
                Some(row) => {
                    row.set(ticket.column(), ticket.previous().clone());
                    guard.push(GridEvent::CellRolledBack {
                        key: ticket.row_key().to_string(),
                        column: ticket.column().to_string(),
                        value: ticket.previous().clone(),
                    });
                }
                None => {
                    warn!(
                        "rollback target row '{}' no longer on this page",
                        ticket.row_key()
                    );
                }
            }
        }
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Draft rows
    // -------------------------------------------------------------------------

    /// Append a draft row seeded from the configured defaults.
    pub fn trigger_add_row(&self) -> Uuid {
        let (rid, drafts) = {
            let mut guard = self.write();
            let defaults = guard.defaults.clone();
            let rid = {
                let GridInner {
                    drafts, columns, ..
                } = &mut *guard;
                drafts.push_seeded(columns, &defaults)
            };
            guard.push(GridEvent::DraftAdded { rid });
            (rid, guard.drafts.rows().to_vec())
        };
        self.mark_dirty();
        if let Some(hooks) = &self.hooks {
            hooks.on_add_row_data_change(&drafts);
        }
        rid
    }

    /// The current draft buffer (pull-based read).
    pub fn draft_rows(&self) -> Vec<DraftRow> {
        self.read().drafts.rows().to_vec()
    }

    /// Number of buffered draft rows.
    pub fn draft_count(&self) -> usize {
        self.read().drafts.len()
    }

    /// Hand every buffered draft to the creation collaborator, in order.
    ///
    /// The buffer is NOT cleared: the page acknowledges a confirmed create
    /// by calling [`Grid::clear_drafts`], so an in-flight creation is never
    /// raced. Returns the number of rows flushed.
    pub fn flush_drafts(&self) -> usize {
        let drafts = {
            let mut guard = self.write();
            if guard.drafts.is_empty() {
                return 0;
            }
            let drafts = guard.drafts.rows().to_vec();
            guard.push(GridEvent::DraftsFlushed {
                count: drafts.len(),
            });
            drafts
        };
        if let Some(hooks) = &self.hooks {
            for draft in &drafts {
                hooks.on_add_row(draft);
            }
        }
        drafts.len()
    }

    /// Empty the draft buffer.
    pub fn clear_drafts(&self) {
        let cleared = {
            let mut guard = self.write();
            let count = guard.drafts.clear();
            if count > 0 {
                if guard
                    .session
                    .cursor()
                    .is_some_and(|c| matches!(c.row, RowAt::Draft(_)))
                {
                    guard.cancel_active_edit();
                }
                guard.push(GridEvent::DraftsCleared);
            }
            count > 0
        };
        if cleared {
            self.mark_dirty();
            if let Some(hooks) = &self.hooks {
                hooks.on_add_row_data_change(&[]);
            }
        }
    }

    /// Remove one draft row by rid. Returns `false` for unknown rids.
    pub fn remove_draft(&self, rid: Uuid) -> bool {
        let drafts = {
            let mut guard = self.write();
            let Some(index) = guard.drafts.remove(rid) else {
                return false;
            };
            guard.push(GridEvent::DraftRemoved { rid });
            if let Some(cursor) = guard.session.cursor().cloned()
                && let RowAt::Draft(at) = cursor.row
            {
                if at == index {
                    guard.cancel_active_edit();
                } else if at > index {
                    // Same logical row, shifted down one slot.
                    guard.session.begin(EditCursor {
                        row: RowAt::Draft(at - 1),
                        column: cursor.column,
                    });
                }
            }
            guard.drafts.rows().to_vec()
        };
        self.mark_dirty();
        if let Some(hooks) = &self.hooks {
            hooks.on_add_row_data_change(&drafts);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Fuzzy-match rows of the current page against a query.
    ///
    /// Each row's haystack is the display text of its visible leaf cells.
    /// An empty query matches every row.
    pub fn fuzzy_filter(&self, query: &str) -> Vec<FilterMatch> {
        let haystacks: Vec<String> = {
            let guard = self.read();
            let ids: Vec<String> = guard
                .columns
                .visible_leaves()
                .into_iter()
                .map(|c| c.id.clone())
                .collect();
            guard
                .rows
                .iter()
                .map(|row| {
                    ids.iter()
                        .map(|id| row.get(id).unwrap_or(Value::Null).to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect()
        };
        fuzzy_filter(query, &haystacks)
    }

    // -------------------------------------------------------------------------
    // Events & dirty tracking
    // -------------------------------------------------------------------------

    /// Drain all queued events, oldest first.
    pub fn take_events(&self) -> Vec<GridEvent> {
        self.write().events.drain(..).collect()
    }

    /// Check if the grid has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: GridRow> Clone for Grid<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            hooks: self.hooks.clone(),
        }
    }
}

impl<R: GridRow> std::fmt::Debug for Grid<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid").field("id", &self.id).finish()
    }
}
