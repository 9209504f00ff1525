mod common;

use common::{RecordingHooks, sample_columns};
use tablekit_core::Pager;
use tablekit_core::prelude::*;

#[test]
fn test_page_count_derivation() {
    let mut pager = Pager::new(30);
    pager.set_total_elements(95);
    assert_eq!(pager.page_count(), 4);

    pager.set_total_elements(90);
    assert_eq!(pager.page_count(), 3);

    pager.set_total_elements(0);
    assert_eq!(pager.page_count(), 0);

    pager.set_total_elements(1);
    assert_eq!(pager.page_count(), 1);
}

#[test]
fn test_server_page_count_overrides_derivation() {
    let mut pager = Pager::new(30);
    pager.set_total_elements(95);
    pager.set_server_page_count(Some(7));
    assert_eq!(pager.page_count(), 7);

    pager.set_server_page_count(None);
    assert_eq!(pager.page_count(), 4);
}

#[test]
#[should_panic(expected = "page_size must be positive")]
fn test_zero_page_size_is_a_configuration_bug() {
    let _ = Pager::new(0);
}

#[test]
fn test_navigation_notifies_host_once_per_change() {
    let hooks = RecordingHooks::new();
    let grid: Grid<Record> =
        Grid::new(GridConfig::new(sample_columns()).hooks(hooks.clone()));

    grid.set_page_index(2);
    grid.set_page_index(2); // same page, no callback
    grid.set_page_index(0);

    assert_eq!(*hooks.page_changes.lock().unwrap(), vec![2, 0]);

    let pages: Vec<usize> = grid
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            GridEvent::PageChanged { page_index } => Some(page_index),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![2, 0]);
}

#[test]
fn test_out_of_range_index_passes_through() {
    let hooks = RecordingHooks::new();
    let grid: Grid<Record> =
        Grid::new(GridConfig::new(sample_columns()).hooks(hooks.clone()));
    grid.set_total_elements(10); // one page

    grid.set_page_index(99);
    assert_eq!(grid.page_index(), 99);
    assert_eq!(*hooks.page_changes.lock().unwrap(), vec![99]);
}

#[test]
fn test_page_request_is_plain_data() {
    let request = PageRequest { page_index: 3 };
    assert_eq!(request, PageRequest { page_index: 3 });
}
