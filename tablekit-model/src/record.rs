//! Dynamic grid record

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::GridRow;
use crate::Value;
use crate::error::FieldError;

/// A dynamic row record.
///
/// Records hold cell values as a `HashMap<String, Value>`, allowing a page
/// to feed the grid rows of any shape without declaring a struct per
/// entity. Typed getter methods provide safe access with proper error
/// handling.
///
/// The `key` is the row's stable identity: selection, inline-edit submits
/// and rollback all reference it. Rows fresh off an add-row buffer have no
/// key yet.
///
/// # Example
///
/// ```
/// use tablekit_model::Record;
///
/// let record = Record::with_key("a1b2")
///     .set("name", "Contoso")
///     .set("revenue", 1_000_000i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Contoso"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable row identity, if assigned.
    key: Option<String>,

    /// The cell values.
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record without a key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new record with the given key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            fields: HashMap::new(),
        }
    }

    /// Returns the row key, if set.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Sets the row key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns a mutable reference to all fields.
    pub fn fields_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Returns a string field.
    ///
    /// `Ok(None)` when the field is absent or null; `Err` on type mismatch.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Returns an integer field.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Returns a float field.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Float(x)) => Ok(Some(*x)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Returns a decimal field.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Returns a boolean field.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Returns a date field.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(field, "date", other.type_name())),
        }
    }
}

impl GridRow for Record {
    fn key(&self) -> Option<String> {
        self.key.clone()
    }

    fn get(&self, field: &str) -> Option<Value> {
        self.fields.get(field).cloned()
    }

    fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }
}
