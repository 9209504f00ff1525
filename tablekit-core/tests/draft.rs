mod common;

use common::{RecordingHooks, editable_grid, sample_columns};
use tablekit_core::prelude::*;

#[test]
fn test_trigger_seeds_editable_columns_with_defaults() {
    let hooks = RecordingHooks::new();
    let grid: Grid<Record> = Grid::new(
        GridConfig::new(sample_columns())
            .editable()
            .default_draft_values(Record::new().set("qty", 1i64))
            .hooks(hooks),
    );

    grid.trigger_add_row();
    let drafts = grid.draft_rows();
    assert_eq!(drafts.len(), 1);

    let record = drafts[0].record();
    assert_eq!(record.get_int("qty").unwrap(), Some(1));
    // Editable columns without a default are present but null.
    assert_eq!(record.get("name"), Some(&Value::Null));
    assert_eq!(record.get("due"), Some(&Value::Null));
    // Read-only columns are not seeded.
    assert!(!record.contains("status"));
    // Drafts carry no persistent key until the backend assigns one.
    assert_eq!(record.key(), None);
}

#[test]
fn test_draft_edits_bypass_the_update_collaborator() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks.clone());

    grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(0), "name").unwrap();
    let outcome = grid.submit_edit("New Co").unwrap();

    assert!(matches!(outcome, SubmitOutcome::DraftUpdated));
    assert_eq!(hooks.cell_update_count(), 0);
    assert_eq!(
        grid.draft_rows()[0].record().get_string("name").unwrap(),
        Some("New Co")
    );
    // trigger + edit each notified the host of the buffer state.
    assert_eq!(*hooks.buffer_sizes.lock().unwrap(), vec![1, 1]);
}

#[test]
fn test_flush_hands_rows_over_but_keeps_the_buffer() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks.clone());

    grid.trigger_add_row();
    grid.trigger_add_row();
    let flushed = grid.flush_drafts();

    assert_eq!(flushed, 2);
    assert_eq!(hooks.flushed.lock().unwrap().len(), 2);
    // Not cleared: the page acknowledges the confirmed create explicitly.
    assert_eq!(grid.draft_count(), 2);

    grid.clear_drafts();
    assert_eq!(grid.draft_count(), 0);
    assert_eq!(hooks.buffer_sizes.lock().unwrap().last(), Some(&0));
}

#[test]
fn test_flush_of_empty_buffer_is_silent() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks.clone());
    assert_eq!(grid.flush_drafts(), 0);
    assert!(hooks.flushed.lock().unwrap().is_empty());
    assert!(grid.take_events().iter().all(|e| !matches!(
        e,
        GridEvent::DraftsFlushed { .. }
    )));
}

#[test]
fn test_rid_is_stable_across_edits_and_fresh_after_clear() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let rid = grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(0), "qty").unwrap();
    grid.submit_edit("5").unwrap();
    assert_eq!(grid.draft_rows()[0].rid(), rid);

    grid.clear_drafts();
    let fresh = grid.trigger_add_row();
    assert_ne!(fresh, rid);
}

#[test]
fn test_remove_draft_by_rid() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks.clone());

    let first = grid.trigger_add_row();
    let second = grid.trigger_add_row();

    assert!(grid.remove_draft(first));
    assert!(!grid.remove_draft(first)); // already gone
    assert_eq!(grid.draft_rows()[0].rid(), second);
    assert_eq!(hooks.buffer_sizes.lock().unwrap().last(), Some(&1));
}

#[test]
fn test_removing_the_edited_draft_cancels_the_edit() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let rid = grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(0), "name").unwrap();
    grid.remove_draft(rid);

    assert!(grid.editing_cell().is_none());
}

#[test]
fn test_removing_an_earlier_draft_shifts_the_edit_cursor() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let first = grid.trigger_add_row();
    grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(1), "name").unwrap();
    grid.remove_draft(first);

    let cursor = grid.editing_cell().unwrap();
    assert_eq!(cursor.row, RowAt::Draft(0));
    assert_eq!(cursor.column, "name");
}

#[test]
fn test_clearing_drafts_cancels_a_draft_edit() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(0), "name").unwrap();
    grid.clear_drafts();

    assert!(grid.editing_cell().is_none());
    assert!(grid
        .take_events()
        .iter()
        .any(|e| matches!(e, GridEvent::DraftsCleared)));
}
