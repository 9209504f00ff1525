//! GridRow trait - the seam between page data and the grid controller.

use crate::Value;

/// Trait for items that can be managed as rows by a grid.
///
/// Implement this trait to let the controller read and write your data by
/// column accessor key. Pages with a fixed row shape implement it on their
/// own structs; dynamic pages use [`Record`](crate::Record), which
/// implements it out of the box.
///
/// # Example
///
/// ```
/// use tablekit_model::{GridRow, Value};
///
/// #[derive(Clone)]
/// struct Order {
///     id: u32,
///     customer: String,
///     quantity: i64,
/// }
///
/// impl GridRow for Order {
///     fn key(&self) -> Option<String> {
///         Some(self.id.to_string())
///     }
///
///     fn get(&self, field: &str) -> Option<Value> {
///         match field {
///             "customer" => Some(Value::from(self.customer.clone())),
///             "quantity" => Some(Value::from(self.quantity)),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, field: &str, value: Value) {
///         match (field, value) {
///             ("customer", Value::String(s)) => self.customer = s,
///             ("quantity", Value::Int(n)) => self.quantity = n,
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait GridRow: Clone + Send + Sync + 'static {
    /// Stable identity for this row.
    ///
    /// Selection, cell submits and rollback all reference this key; it must
    /// survive re-sorting, filtering and pagination. `None` means the row
    /// has no resolvable identity yet (a submit on such a row aborts with a
    /// warning instead of calling the update collaborator).
    fn key(&self) -> Option<String>;

    /// Reads the value behind a column accessor key.
    ///
    /// Returns `None` for accessors the row does not carry.
    fn get(&self, field: &str) -> Option<Value>;

    /// Writes the value behind a column accessor key.
    ///
    /// Unknown accessors should be ignored.
    fn set(&mut self, field: &str, value: Value);
}
