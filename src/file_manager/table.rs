//! Typed tabular data produced by the FASTA and TSV accessors.
//!
//! A [`Table`] is a small in-memory stand-in for a dataframe: named columns in
//! declared order and rows of dynamically-typed [`FieldValue`]s.

use crate::error::{Result, SeqprepError};
use std::fmt;

/// Declared type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Free text, kept verbatim
    Text,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit float
    Float,
    /// `true`/`false`
    Bool,
}

impl ColumnType {
    /// Get human-readable name for the column type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// A dynamically-typed field value, one cell of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// An empty field in a non-text column
    Null,
}

impl FieldValue {
    /// Parse a raw TSV field according to its declared column type.
    ///
    /// Empty fields in non-text columns become [`FieldValue::Null`]; a text
    /// column keeps the empty string.
    pub fn parse(raw: &str, dtype: ColumnType, column: &str) -> Result<Self> {
        if raw.is_empty() && dtype != ColumnType::Text {
            return Ok(Self::Null);
        }

        let parse_error = || SeqprepError::FieldParse {
            column: column.to_string(),
            value: raw.to_string(),
            dtype: dtype.name().to_string(),
        };

        match dtype {
            ColumnType::Text => Ok(Self::Text(raw.to_string())),
            ColumnType::Integer => raw.parse::<i64>().map(Self::Integer).map_err(|_| parse_error()),
            ColumnType::Float => raw.parse::<f64>().map(Self::Float).map_err(|_| parse_error()),
            ColumnType::Bool => match raw {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(parse_error()),
            },
        }
    }

    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Borrow the value as text if it is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "<null>"),
        }
    }
}

/// Named columns in declared order plus typed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl Table {
    /// Build a table; every row must have one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<FieldValue>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Column names in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    /// The values of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&FieldValue>> {
        let idx = self.columns.iter().position(|col| col == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the table into its rows, dropping the column names.
    pub fn into_rows(self) -> Vec<Vec<FieldValue>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_type() {
        assert_eq!(
            FieldValue::parse("42", ColumnType::Integer, "id").unwrap(),
            FieldValue::Integer(42)
        );
        assert_eq!(
            FieldValue::parse("0.5", ColumnType::Float, "ratio").unwrap(),
            FieldValue::Float(0.5)
        );
        assert_eq!(
            FieldValue::parse("true", ColumnType::Bool, "flag").unwrap(),
            FieldValue::Bool(true)
        );
        assert_eq!(
            FieldValue::parse("ACGT", ColumnType::Text, "sequence").unwrap(),
            FieldValue::Text("ACGT".to_string())
        );
    }

    #[test]
    fn test_parse_failure_names_column_and_value() {
        match FieldValue::parse("abc", ColumnType::Integer, "id").unwrap_err() {
            SeqprepError::FieldParse {
                column,
                value,
                dtype,
            } => {
                assert_eq!(column, "id");
                assert_eq!(value, "abc");
                assert_eq!(dtype, "integer");
            }
            other => panic!("Expected FieldParse, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(
            FieldValue::parse("", ColumnType::Integer, "id").unwrap(),
            FieldValue::Null
        );
        assert_eq!(
            FieldValue::parse("", ColumnType::Text, "name").unwrap(),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_table_column_access() {
        let table = Table::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![FieldValue::Integer(1), FieldValue::Text("a".to_string())],
                vec![FieldValue::Integer(2), FieldValue::Text("b".to_string())],
            ],
        );

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());

        let ids = table.column("id").unwrap();
        assert_eq!(ids, vec![&FieldValue::Integer(1), &FieldValue::Integer(2)]);
        assert!(table.column("missing").is_none());
    }
}
