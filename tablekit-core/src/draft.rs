//! Add-row buffer: unsaved rows pending creation.

use tablekit_model::ColumnSet;
use tablekit_model::Record;
use tablekit_model::Value;
use uuid::Uuid;

/// One buffered, not-yet-persisted row.
///
/// The `rid` is an ephemeral identity for the buffered line itself - stable
/// across edits so the host can diff buffer snapshots and dedup repeated
/// flushes. The record's key stays unset until the backend assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    rid: Uuid,
    record: Record,
}

impl DraftRow {
    pub(crate) fn new(record: Record) -> Self {
        Self {
            rid: Uuid::new_v4(),
            record,
        }
    }

    /// Ephemeral identity of this buffered line.
    pub fn rid(&self) -> Uuid {
        self.rid
    }

    /// The buffered field values.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}

/// Ordered buffer of draft rows.
///
/// The buffer only ever mutates through the grid's entry points; flushing
/// hands the rows to the creation collaborator without clearing, and
/// clearing is the caller's explicit acknowledgement of a confirmed create.
#[derive(Debug, Clone, Default)]
pub(crate) struct DraftBuffer {
    rows: Vec<DraftRow>,
}

impl DraftBuffer {
    /// Append a draft seeded from column defaults.
    ///
    /// Every editable leaf column gets a field: the configured default
    /// value when one exists, `Null` otherwise.
    pub(crate) fn push_seeded(&mut self, columns: &ColumnSet, defaults: &Record) -> Uuid {
        let mut record = Record::new();
        for id in columns.editable_leaf_ids() {
            let value = defaults.get(&id).cloned().unwrap_or(Value::Null);
            record.insert(id, value);
        }
        let draft = DraftRow::new(record);
        let rid = draft.rid;
        self.rows.push(draft);
        rid
    }

    pub(crate) fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut DraftRow> {
        self.rows.get_mut(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove a draft by rid. Returns its former index.
    pub(crate) fn remove(&mut self, rid: Uuid) -> Option<usize> {
        let index = self.rows.iter().position(|d| d.rid == rid)?;
        self.rows.remove(index);
        Some(index)
    }

    /// Empty the buffer, returning how many drafts were dropped.
    pub(crate) fn clear(&mut self) -> usize {
        let count = self.rows.len();
        self.rows.clear();
        count
    }
}
