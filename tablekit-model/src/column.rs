//! Column definitions and the derived column index.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::Value;
use crate::error::EditError;

/// Default column width in pixels, matching the usual table default.
pub const DEFAULT_COLUMN_WIDTH: u16 = 150;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One option of a select editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,
    /// Value stored in the cell.
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Input type for an editable column.
///
/// The editor decides how raw input text is converted into a typed
/// [`Value`] before the grid applies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Editor {
    /// Free text input.
    Text,
    /// Numeric input; integers stay integers, anything else is decimal.
    Number,
    /// ISO-8601 date input (YYYY-MM-DD).
    Date,
    /// Fixed option list; input must match one option's value.
    Select { options: Vec<SelectOption> },
}

impl Editor {
    /// Convenience constructor for a select editor.
    pub fn select(options: Vec<SelectOption>) -> Self {
        Editor::Select { options }
    }

    /// Parses raw editor input into a typed value.
    ///
    /// Empty input parses as [`Value::Null`] for every editor kind (a
    /// cleared cell, not an error).
    pub fn parse(&self, input: &str) -> Result<Value, EditError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Value::Null);
        }
        match self {
            Editor::Text => Ok(Value::String(input.to_string())),
            Editor::Number => {
                if let Ok(i) = input.parse::<i64>() {
                    return Ok(Value::Int(i));
                }
                input
                    .parse::<Decimal>()
                    .map(Value::Decimal)
                    .map_err(|_| EditError::InvalidNumber {
                        input: input.to_string(),
                    })
            }
            Editor::Date => input
                .parse::<NaiveDate>()
                .map(Value::Date)
                .map_err(|_| EditError::InvalidDate {
                    input: input.to_string(),
                }),
            Editor::Select { options } => {
                if options.iter().any(|o| o.value == input) {
                    Ok(Value::String(input.to_string()))
                } else {
                    Err(EditError::UnknownOption {
                        input: input.to_string(),
                    })
                }
            }
        }
    }
}

/// A column definition.
///
/// Columns are read-only configuration supplied by the page: an accessor
/// key into the row, a header label, width, alignment, visibility, and
/// optional editor metadata. A column with children is a header group; only
/// leaf columns carry data.
///
/// # Example
///
/// ```
/// use tablekit_model::{Alignment, Column, Editor};
///
/// let columns = vec![
///     Column::new("order_no", "Order #").width(90),
///     Column::new("customer", "Customer").editable(Editor::Text).sortable(),
///     Column::new("quantity", "Qty")
///         .align(Alignment::Right)
///         .editable(Editor::Number),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Accessor key into the row.
    pub id: String,
    /// Column header text.
    pub header: String,
    /// Column width in pixels.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether the column is currently shown.
    pub visible: bool,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Editor metadata; `None` means the column is read-only.
    pub editor: Option<Editor>,
    /// Child columns; non-empty makes this a header group.
    pub children: Vec<Column>,
}

impl Column {
    /// Create a new leaf column with the given accessor key and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: DEFAULT_COLUMN_WIDTH,
            align: Alignment::Left,
            visible: true,
            sortable: false,
            editor: None,
            children: Vec::new(),
        }
    }

    /// Create a header group spanning the given child columns.
    pub fn group(id: impl Into<String>, header: impl Into<String>, children: Vec<Column>) -> Self {
        Self {
            children,
            ..Self::new(id, header)
        }
    }

    /// Set the column width in pixels.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Hide the column initially.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attach an editor, making the column editable.
    pub fn editable(mut self, editor: Editor) -> Self {
        self.editor = Some(editor);
        self
    }

    /// Whether this column is a header group.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this leaf column can be edited.
    pub fn is_editable(&self) -> bool {
        self.editor.is_some() && !self.is_group()
    }
}

/// An ordered column collection with derived lookup caches.
///
/// The set owns the flattened leaf list and per-column x-offsets; both are
/// recomputed whenever definitions, widths or visibility change.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
    /// (leaf id, x-offset) for each visible leaf, in display order.
    offsets: Vec<(String, u16)>,
    /// Sum of visible leaf widths.
    total_width: u16,
}

impl ColumnSet {
    /// Create a column set from top-level definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut set = Self {
            columns,
            offsets: Vec::new(),
            total_width: 0,
        };
        set.reindex();
        set
    }

    /// Top-level definitions (groups included).
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Replace all definitions.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.reindex();
    }

    /// Flattened leaf columns in display order.
    pub fn leaves(&self) -> Vec<&Column> {
        let mut out = Vec::new();
        for col in &self.columns {
            if col.is_group() {
                out.extend(col.children.iter());
            } else {
                out.push(col);
            }
        }
        out
    }

    /// Visible leaf columns in display order.
    pub fn visible_leaves(&self) -> Vec<&Column> {
        self.leaves().into_iter().filter(|c| c.visible).collect()
    }

    /// Accessor keys of visible leaf columns that carry an editor.
    pub fn editable_leaf_ids(&self) -> Vec<String> {
        self.visible_leaves()
            .into_iter()
            .filter(|c| c.is_editable())
            .map(|c| c.id.clone())
            .collect()
    }

    /// Look up a leaf column by accessor key.
    pub fn leaf(&self, id: &str) -> Option<&Column> {
        self.leaves().into_iter().find(|c| c.id == id)
    }

    /// X-offsets of visible leaves, in display order.
    pub fn offsets(&self) -> &[(String, u16)] {
        &self.offsets
    }

    /// Sum of visible leaf widths.
    pub fn total_width(&self) -> u16 {
        self.total_width
    }

    /// Resize a leaf column. Returns `false` for unknown ids.
    pub fn set_width(&mut self, id: &str, width: u16) -> bool {
        if self.leaf_mut(id, |c| c.width = width) {
            self.reindex();
            return true;
        }
        false
    }

    /// Show or hide a leaf column. Returns `false` for unknown ids.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        if self.leaf_mut(id, |c| c.visible = visible) {
            self.reindex();
            return true;
        }
        false
    }

    fn leaf_mut(&mut self, id: &str, apply: impl FnOnce(&mut Column)) -> bool {
        for col in &mut self.columns {
            if col.is_group() {
                if let Some(child) = col.children.iter_mut().find(|c| c.id == id) {
                    apply(child);
                    return true;
                }
            } else if col.id == id {
                apply(col);
                return true;
            }
        }
        false
    }

    /// Recompute offsets and total width from the current definitions.
    fn reindex(&mut self) {
        self.offsets.clear();
        let mut x = 0u16;
        for col in &self.columns {
            let leaves: Vec<&Column> = if col.is_group() {
                col.children.iter().collect()
            } else {
                vec![col]
            };
            for leaf in leaves.into_iter().filter(|c| c.visible) {
                self.offsets.push((leaf.id.clone(), x));
                x = x.saturating_add(leaf.width);
            }
        }
        self.total_width = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_widths() {
        let set = ColumnSet::new(vec![
            Column::new("a", "A").width(10),
            Column::new("b", "B").width(20),
            Column::new("c", "C").width(5),
        ]);
        let ids: Vec<(&str, u16)> = set.offsets().iter().map(|(id, x)| (id.as_str(), *x)).collect();
        assert_eq!(ids, vec![("a", 0), ("b", 10), ("c", 30)]);
        assert_eq!(set.total_width(), 35);
    }

    #[test]
    fn test_hidden_columns_skip_offsets() {
        let mut set = ColumnSet::new(vec![
            Column::new("a", "A").width(10),
            Column::new("b", "B").width(20),
        ]);
        assert!(set.set_visible("a", false));
        assert_eq!(set.offsets().len(), 1);
        assert_eq!(set.offsets()[0], ("b".to_string(), 0));
        assert_eq!(set.total_width(), 20);
    }

    #[test]
    fn test_groups_flatten_to_leaves() {
        let set = ColumnSet::new(vec![
            Column::new("id", "ID").width(8),
            Column::group(
                "amounts",
                "Amounts",
                vec![
                    Column::new("net", "Net").width(12),
                    Column::new("tax", "Tax").width(12),
                ],
            ),
        ]);
        let ids: Vec<&str> = set.leaves().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["id", "net", "tax"]);
        assert_eq!(set.total_width(), 32);
    }
}
