//! Inline-edit session: edit cursor and update ticketing.

use std::collections::HashMap;

use tablekit_model::Value;

/// Which row a cursor points at.
///
/// Body rows are the current page's persisted rows; draft rows live in the
/// add-row buffer and are edited through the same session but never talk to
/// the update collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAt {
    /// Index into the current page's rows.
    Body(usize),
    /// Index into the draft buffer.
    Draft(usize),
}

/// The single cell currently in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub row: RowAt,
    pub column: String,
}

/// Direction for tab-order navigation between editable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Next,
    Prev,
}

/// Handle for one outstanding optimistic update.
///
/// A ticket is created when a changed value is submitted and the local row
/// already holds the new value. If the external update collaborator rejects
/// it, the grid rolls the cell back to `previous` - but only while the
/// ticket is still the latest one issued for that cell. Rejections of
/// superseded tickets are dropped so a slow failure cannot clobber a newer,
/// already-confirmed value.
#[derive(Debug, Clone)]
pub struct UpdateTicket {
    pub(crate) row_key: String,
    pub(crate) column: String,
    pub(crate) seq: u64,
    pub(crate) previous: Value,
}

impl UpdateTicket {
    /// Key of the row the update targets.
    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    /// Accessor key of the edited column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The cell value before the optimistic write.
    pub fn previous(&self) -> &Value {
        &self.previous
    }
}

/// Edit cursor plus per-cell update sequencing.
#[derive(Debug, Default)]
pub(crate) struct EditSession {
    cursor: Option<EditCursor>,
    next_seq: u64,
    /// Latest outstanding sequence number per (row key, column).
    latest: HashMap<(String, String), u64>,
}

impl EditSession {
    pub(crate) fn cursor(&self) -> Option<&EditCursor> {
        self.cursor.as_ref()
    }

    /// Move the cursor, returning the previously open cell (if any and
    /// different) so the caller can fire cancel semantics for it.
    pub(crate) fn begin(&mut self, cursor: EditCursor) -> Option<EditCursor> {
        let previous = self.cursor.take();
        let abandoned = previous.filter(|p| *p != cursor);
        self.cursor = Some(cursor);
        abandoned
    }

    /// Close the cursor, returning the cell that was open.
    pub(crate) fn clear(&mut self) -> Option<EditCursor> {
        self.cursor.take()
    }

    /// Issue a ticket for an optimistic update, superseding any earlier
    /// outstanding ticket for the same cell.
    pub(crate) fn issue(&mut self, row_key: &str, column: &str, previous: Value) -> UpdateTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest
            .insert((row_key.to_string(), column.to_string()), seq);
        UpdateTicket {
            row_key: row_key.to_string(),
            column: column.to_string(),
            seq,
            previous,
        }
    }

    /// Whether the ticket is still the latest issued for its cell.
    pub(crate) fn is_latest(&self, ticket: &UpdateTicket) -> bool {
        self.latest
            .get(&(ticket.row_key.clone(), ticket.column.clone()))
            .is_some_and(|seq| *seq == ticket.seq)
    }

    /// Retire a ticket once its outcome is known.
    ///
    /// Only removes the cell entry when the ticket is still the latest;
    /// settling a superseded ticket must not forget the newer one.
    pub(crate) fn settle(&mut self, ticket: &UpdateTicket) {
        if self.is_latest(ticket) {
            self.latest
                .remove(&(ticket.row_key.clone(), ticket.column.clone()));
        }
    }
}

/// Compute the tab-navigation target among editable, visible leaf columns.
///
/// Wraps around at both ends. If the current column is not in the list
/// (hidden or made read-only since the edit began), navigation restarts at
/// the first editable column.
pub(crate) fn tab_target(
    editable: &[String],
    current: &str,
    direction: TabDirection,
) -> Option<String> {
    if editable.is_empty() {
        return None;
    }
    let len = editable.len();
    let current_index = editable.iter().position(|id| id == current);
    let next_index = match (current_index, direction) {
        (Some(i), TabDirection::Next) => (i + 1) % len,
        (Some(i), TabDirection::Prev) => (i + len - 1) % len,
        (None, _) => 0,
    };
    Some(editable[next_index].clone())
}
