mod common;

use common::{RecordingHooks, editable_grid, sample_columns, sample_rows};
use tablekit_core::prelude::*;

#[test]
fn test_selection_is_pruned_when_rows_change() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    grid.toggle_row_selection("r1");
    grid.toggle_row_selection("r2");
    grid.take_events();

    // r2 disappears with the next page of data.
    let rows = vec![sample_rows().remove(0), sample_rows().remove(2)];
    grid.set_rows(rows);

    assert_eq!(grid.selected_keys(), vec!["r1".to_string()]);
    let events = grid.take_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GridEvent::SelectionChanged { added, removed }
            if added.is_empty() && removed == &vec!["r2".to_string()]
    )));
}

#[test]
fn test_single_select_dance_through_the_grid() {
    let grid: Grid<Record> = Grid::new(
        GridConfig::new(sample_columns()).selection_mode(SelectionMode::Single),
    );
    grid.set_rows(sample_rows());

    grid.toggle_row_selection("r1");
    let (added, removed) = grid.toggle_row_selection("r2");
    assert_eq!(added, vec!["r2".to_string()]);
    assert_eq!(removed, vec!["r1".to_string()]);
    assert_eq!(grid.selected_keys(), vec!["r2".to_string()]);
}

#[test]
fn test_selected_rows_resolve_by_key() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    grid.toggle_row_selection("r3");
    let rows = grid.selected_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_string("name").unwrap(), Some("Initech"));
}

#[test]
fn test_select_all_and_clear() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let added = grid.select_all();
    assert_eq!(added.len(), 3);
    let removed = grid.clear_selection();
    assert_eq!(removed.len(), 3);
    assert!(grid.selected_keys().is_empty());
}

#[test]
fn test_find_row_by_key() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let (index, row) = grid.find_row("r2").unwrap();
    assert_eq!(index, 1);
    assert_eq!(row.get_string("name").unwrap(), Some("Globex"));
    assert!(grid.find_row("r9").is_none());
}

#[test]
fn test_sort_toggles_direction_per_column() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    assert_eq!(grid.toggle_sort("name"), Some(("name".to_string(), true)));
    assert_eq!(grid.toggle_sort("name"), Some(("name".to_string(), false)));
    // qty is not sortable; sort state is untouched.
    assert_eq!(grid.toggle_sort("qty"), None);
    assert_eq!(grid.sort(), Some(("name".to_string(), false)));
}

#[test]
fn test_column_sizing_feeds_offsets() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    assert!(grid.set_column_width("name", 200));
    let offsets = grid.column_offsets();
    assert_eq!(offsets[0], ("name".to_string(), 0));
    assert_eq!(offsets[1].1, 200);
    assert!(!grid.set_column_width("nope", 10));
}

#[test]
fn test_hiding_the_edited_column_cancels_the_edit() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    grid.begin_edit(RowAt::Body(0), "qty").unwrap();
    assert!(grid.set_column_visible("qty", false));
    assert!(grid.editing_cell().is_none());

    let visible: Vec<String> = grid
        .visible_leaf_columns()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(visible, vec!["name", "due", "status"]);
}

#[test]
fn test_fuzzy_filter_over_visible_cells() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    let matches = grid.fuzzy_filter("");
    assert_eq!(matches.len(), 3); // empty query keeps every row

    let matches = grid.fuzzy_filter("glbx");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 1); // Globex

    let matches = grid.fuzzy_filter("zzzz");
    assert!(matches.is_empty());
}

#[test]
fn test_events_drain_once() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);

    grid.toggle_row_selection("r1");
    assert!(!grid.take_events().is_empty());
    assert!(grid.take_events().is_empty());
}

#[test]
fn test_dirty_flag_tracks_mutations() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);
    grid.clear_dirty();

    assert!(!grid.is_dirty());
    grid.toggle_row_selection("r1");
    assert!(grid.is_dirty());
    grid.clear_dirty();
    assert!(!grid.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);
    let view = grid.clone();

    grid.toggle_row_selection("r1");
    assert!(view.is_selected("r1"));
    assert_eq!(view.id(), grid.id());
}

#[test]
fn test_page_data_flow_round_trip() {
    // A host reacting to PageChanged by feeding back a new page.
    let hooks = RecordingHooks::new();
    let grid = editable_grid(hooks);
    grid.set_total_elements(95);
    assert_eq!(grid.page_count(), 4); // page size 30

    grid.set_page_index(1);
    grid.set_rows(vec![Record::with_key("r31").set("name", "Umbrella")]);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.page_index(), 1);
}
