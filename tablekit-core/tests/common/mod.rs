#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tablekit_core::prelude::*;

/// Hooks that record every collaborator invocation for assertions.
pub struct RecordingHooks {
    /// Answer returned from `on_cell_update`.
    pub outcome: Mutex<UpdateOutcome>,
    pub cell_updates: Mutex<Vec<(String, String, Value)>>,
    pub page_changes: Mutex<Vec<usize>>,
    pub flushed: Mutex<Vec<DraftRow>>,
    /// Buffer length at each `on_add_row_data_change` call.
    pub buffer_sizes: Mutex<Vec<usize>>,
}

impl RecordingHooks {
    pub fn new() -> Arc<Self> {
        Self::answering(UpdateOutcome::Accepted)
    }

    pub fn answering(outcome: UpdateOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            cell_updates: Mutex::new(Vec::new()),
            page_changes: Mutex::new(Vec::new()),
            flushed: Mutex::new(Vec::new()),
            buffer_sizes: Mutex::new(Vec::new()),
        })
    }

    pub fn cell_update_count(&self) -> usize {
        self.cell_updates.lock().unwrap().len()
    }
}

impl GridHooks for RecordingHooks {
    fn on_page_change(&self, request: PageRequest) {
        self.page_changes.lock().unwrap().push(request.page_index);
    }

    fn on_cell_update(&self, key: &str, column: &str, value: &Value) -> UpdateOutcome {
        self.cell_updates
            .lock()
            .unwrap()
            .push((key.to_string(), column.to_string(), value.clone()));
        *self.outcome.lock().unwrap()
    }

    fn on_add_row(&self, draft: &DraftRow) {
        self.flushed.lock().unwrap().push(draft.clone());
    }

    fn on_add_row_data_change(&self, drafts: &[DraftRow]) {
        self.buffer_sizes.lock().unwrap().push(drafts.len());
    }
}

/// Columns used across the grid tests: three editable, one read-only.
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").editable(Editor::Text).sortable(),
        Column::new("qty", "Qty").editable(Editor::Number),
        Column::new("due", "Due").editable(Editor::Date),
        Column::new("status", "Status"),
    ]
}

pub fn sample_rows() -> Vec<Record> {
    vec![
        Record::with_key("r1")
            .set("name", "ACME")
            .set("qty", 100i64)
            .set("status", "open"),
        Record::with_key("r2")
            .set("name", "Globex")
            .set("qty", 25i64)
            .set("status", "open"),
        Record::with_key("r3")
            .set("name", "Initech")
            .set("qty", 7i64)
            .set("status", "closed"),
    ]
}

/// An editable multi-select grid over the sample rows.
pub fn editable_grid(hooks: Arc<RecordingHooks>) -> Grid<Record> {
    let grid = Grid::new(
        GridConfig::new(sample_columns())
            .selection_mode(SelectionMode::Multiple)
            .editable()
            .hooks(hooks),
    );
    grid.set_rows(sample_rows());
    grid.take_events();
    grid
}
