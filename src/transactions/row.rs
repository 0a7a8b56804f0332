//! A schema-less result row.
//!
//! The console does not know the table's columns in advance, so each row is
//! an ordered mapping from column name to a tagged scalar value rather than
//! a struct.

use rusqlite::types::ValueRef;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A single dynamically-typed column value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// SQL NULL.
    Null,
    /// An integer column value, including year and quarter numbers.
    Integer(i64),
    /// A floating point column value.
    Real(f64),
    /// A text column value. Timestamps are stored and returned as text.
    Text(String),
}

impl From<ValueRef<'_>> for ScalarValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => ScalarValue::Null,
            ValueRef::Integer(value) => ScalarValue::Integer(value),
            ValueRef::Real(value) => ScalarValue::Real(value),
            ValueRef::Text(text) => ScalarValue::Text(String::from_utf8_lossy(text).into_owned()),
            // Not expected in this table, rendered as text rather than
            // growing the scalar union.
            ValueRef::Blob(blob) => ScalarValue::Text(String::from_utf8_lossy(blob).into_owned()),
        }
    }
}

/// One result row, with the columns in table definition order.
///
/// Serializes as a JSON object so the response envelope matches what a SQL
/// client would see.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<(String, ScalarValue)>);

impl Row {
    /// Read every column of a SQL result row.
    ///
    /// `column_names` must come from the statement that produced `row`.
    pub(crate) fn from_sql_row(
        row: &rusqlite::Row,
        column_names: &[String],
    ) -> Result<Self, rusqlite::Error> {
        let mut cells = Vec::with_capacity(column_names.len());

        for (index, column_name) in column_names.iter().enumerate() {
            let value = ScalarValue::from(row.get_ref(index)?);
            cells.push((column_name.clone(), value));
        }

        Ok(Self(cells))
    }

    /// The column names in table definition order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(column_name, _)| column_name.as_str())
    }

    /// The column values paired with their column names, in table
    /// definition order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.0
            .iter()
            .map(|(column_name, value)| (column_name.as_str(), value))
    }

    /// Look up a column value by name.
    pub fn get(&self, column_name: &str) -> Option<&ScalarValue> {
        self.0
            .iter()
            .find(|(name, _)| name == column_name)
            .map(|(_, value)| value)
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (column_name, value) in &self.0 {
            map.serialize_entry(column_name, value)?;
        }

        map.end()
    }
}
