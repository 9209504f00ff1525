//! Paged orders example - drives the grid controller against a simulated API.
//!
//! A listing page in miniature: orders are fetched in pages of 20, rows can
//! be selected and edited inline, and new orders are drafted in the add-row
//! buffer before being handed to the "backend". Events are printed as the
//! host drains them.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tablekit_core::prelude::*;

// =============================================================================
// Data types
// =============================================================================

/// An order from our "API".
#[derive(Debug, Clone)]
struct Order {
    id: u32,
    customer: String,
    quantity: i64,
    status: String,
}

impl GridRow for Order {
    fn key(&self) -> Option<String> {
        Some(self.id.to_string())
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "customer" => Some(Value::from(self.customer.clone())),
            "quantity" => Some(Value::from(self.quantity)),
            "status" => Some(Value::from(self.status.clone())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) {
        match (field, value) {
            ("customer", Value::String(s)) => self.customer = s,
            ("quantity", Value::Int(n)) => self.quantity = n,
            ("status", Value::String(s)) => self.status = s,
            _ => {}
        }
    }
}

// =============================================================================
// Simulated API
// =============================================================================

const PAGE_SIZE: usize = 20;
const TOTAL_ORDERS: usize = 95;

/// Simulated backend returning one page of orders.
fn fetch_page(page_index: usize) -> (Vec<Order>, usize) {
    let customers = ["ACME", "Globex", "Initech", "Umbrella", "Stark"];
    let start = page_index * PAGE_SIZE;
    let orders: Vec<Order> = (start..(start + PAGE_SIZE).min(TOTAL_ORDERS))
        .map(|i| Order {
            id: i as u32 + 1,
            customer: customers[i % customers.len()].to_string(),
            quantity: ((i as i64 * 17) % 90) + 1,
            status: if i % 3 == 0 { "open" } else { "shipped" }.to_string(),
        })
        .collect();
    (orders, TOTAL_ORDERS)
}

// =============================================================================
// Hooks
// =============================================================================

/// Collaborators of the hosting page; here they just log and accept.
struct DemoHooks;

impl GridHooks for DemoHooks {
    fn on_page_change(&self, request: PageRequest) {
        log::info!("page change requested: {}", request.page_index);
    }

    fn on_cell_update(&self, key: &str, column: &str, value: &Value) -> UpdateOutcome {
        log::info!("PATCH order {key}: {column} = {value}");
        UpdateOutcome::Accepted
    }

    fn on_add_row(&self, draft: &DraftRow) {
        log::info!("POST new order: {:?}", draft.record());
    }
}

// =============================================================================
// Host loop
// =============================================================================

fn columns() -> Vec<Column> {
    vec![
        Column::new("customer", "Customer")
            .width(180)
            .editable(Editor::Text)
            .sortable(),
        Column::new("quantity", "Qty")
            .width(80)
            .align(Alignment::Right)
            .editable(Editor::Number),
        Column::new("status", "Status").width(100).editable(Editor::select(vec![
            SelectOption::new("Open", "open"),
            SelectOption::new("Shipped", "shipped"),
        ])),
    ]
}

fn drain(grid: &Grid<Order>) {
    for event in grid.take_events() {
        println!("  event: {event:?}");
    }
}

fn main() {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("paged_orders.log").unwrap(),
    )
    .unwrap();

    let grid: Grid<Order> = Grid::new(
        GridConfig::new(columns())
            .page_size(PAGE_SIZE)
            .selection_mode(SelectionMode::Multiple)
            .editable()
            .hooks(std::sync::Arc::new(DemoHooks)),
    );

    // Initial fetch, the way a page does on mount.
    let (orders, total) = fetch_page(0);
    grid.set_rows(orders);
    grid.set_total_elements(total);
    println!(
        "loaded page 1/{} ({} orders total)",
        grid.page_count(),
        grid.total_elements()
    );

    println!("\nselecting two orders:");
    grid.toggle_row_selection("1");
    grid.toggle_row_selection("2");
    drain(&grid);

    println!("\nediting order 1's quantity:");
    grid.begin_edit(RowAt::Body(0), "quantity").unwrap();
    grid.submit_edit("42").unwrap();
    drain(&grid);

    println!("\ndrafting a new order:");
    grid.trigger_add_row();
    grid.begin_edit(RowAt::Draft(0), "customer").unwrap();
    grid.submit_edit("Wayne Enterprises").unwrap();
    grid.begin_edit(RowAt::Draft(0), "quantity").unwrap();
    grid.submit_edit("12").unwrap();
    let flushed = grid.flush_drafts();
    grid.clear_drafts(); // the "backend" confirmed all creates
    println!("  flushed {flushed} draft(s)");
    drain(&grid);

    println!("\nnavigating to page 4:");
    grid.set_page_index(3);
    let (orders, total) = fetch_page(3);
    grid.set_rows(orders);
    grid.set_total_elements(total);
    println!("  page now has {} rows", grid.len());
    drain(&grid);
}
