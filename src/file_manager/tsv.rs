//! TSV accessor: typed tabular loading with optional per-column validation.
//!
//! Validation runs once at construction when column patterns are supplied,
//! and enumerates every offending value per column so the source file can be
//! fixed in a single pass. Parsing into a [`Table`] is a second, independent
//! read; the two-pass shape keeps validation and typing concerns apart.

use crate::error::{Result, SeqprepError};
use crate::file_manager::table::{ColumnType, FieldValue, Table};
use crate::file_manager::ResolvedPath;
use regex::Regex;
use std::path::Path;

/// Insertion-ordered mapping column name -> regex every value must fully match.
pub type ColumnPatterns = Vec<(String, String)>;

/// Insertion-ordered mapping column name -> declared type.
pub type ColumnTypes = Vec<(String, ColumnType)>;

/// Accessor over a tab-separated text file.
#[derive(Debug, Clone)]
pub struct TsvFile {
    path: ResolvedPath,
    has_header: bool,
}

impl TsvFile {
    /// Construct an accessor, validating column patterns when supplied.
    ///
    /// With patterns present every data row is checked immediately:
    /// * `ColumnCount` - a row's field count differs from the declared
    ///   column count (the 1-based data line is reported)
    /// * `PatternMismatch` - a column holds values that fail its regex
    ///   full-match; all offending values of that column are listed
    /// * `InvalidPattern` - a supplied pattern is not a valid regex
    pub fn new(
        path: impl AsRef<Path>,
        col_patterns: Option<&ColumnPatterns>,
        has_header: bool,
    ) -> Result<Self> {
        let tsv = Self {
            path: ResolvedPath::resolve(path)?,
            has_header,
        };

        if let Some(patterns) = col_patterns {
            tsv.validate_cols(patterns)?;
        }

        Ok(tsv)
    }

    /// The resolved absolute path of the file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Whether the first line is treated as a header and skipped.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    fn validate_cols(&self, patterns: &ColumnPatterns) -> Result<()> {
        let n_cols = patterns.len();
        let mut column_data: Vec<Vec<String>> = vec![Vec::new(); n_cols];

        let content = std::fs::read_to_string(self.path())?;
        for (n, line) in self.data_lines(&content).enumerate() {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            if fields.len() != n_cols {
                return Err(SeqprepError::ColumnCount {
                    path: self.path().to_path_buf(),
                    line: n + 1,
                    expected: n_cols,
                    found: fields.len(),
                });
            }
            for (values, field) in column_data.iter_mut().zip(fields) {
                values.push(field.to_string());
            }
        }

        for ((column, pattern), values) in patterns.iter().zip(&column_data) {
            let matcher = full_match_regex(column, pattern)?;
            let nonpattern: Vec<String> = values
                .iter()
                .filter(|value| !matcher.is_match(value))
                .cloned()
                .collect();
            if !nonpattern.is_empty() {
                return Err(SeqprepError::PatternMismatch {
                    column: column.clone(),
                    values: nonpattern,
                });
            }
        }

        Ok(())
    }

    /// Load the file as a table with columns named and typed per `dtypes`
    /// (insertion order = column order), honoring the header-skip flag.
    pub fn as_df(&self, dtypes: &ColumnTypes) -> Result<Table> {
        let content = std::fs::read_to_string(self.path())?;
        let mut rows = Vec::new();

        for (n, line) in self.data_lines(&content).enumerate() {
            let fields: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
            if fields.len() != dtypes.len() {
                return Err(SeqprepError::ColumnCount {
                    path: self.path().to_path_buf(),
                    line: n + 1,
                    expected: dtypes.len(),
                    found: fields.len(),
                });
            }

            let row = fields
                .iter()
                .zip(dtypes)
                .map(|(raw, (column, dtype))| FieldValue::parse(raw, *dtype, column))
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        let columns = dtypes.iter().map(|(name, _)| name.clone()).collect();
        Ok(Table::new(columns, rows))
    }

    /// Same as [`TsvFile::as_df`] but returns bare rows of field values.
    pub fn as_data_list(&self, dtypes: &ColumnTypes) -> Result<Vec<Vec<FieldValue>>> {
        Ok(self.as_df(dtypes)?.into_rows())
    }

    fn data_lines<'a>(&self, content: &'a str) -> impl Iterator<Item = &'a str> {
        content.lines().skip(usize::from(self.has_header))
    }
}

/// Compile a column pattern as an anchored full-match regex.
fn full_match_regex(column: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| SeqprepError::InvalidPattern {
        column: column.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_tsv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn id_name_patterns() -> ColumnPatterns {
        vec![
            ("id".to_string(), r"\d+".to_string()),
            ("name".to_string(), r"[A-Za-z]+".to_string()),
        ]
    }

    #[test]
    fn test_valid_file_passes_validation() {
        let file = create_tsv("id\tname\n1\tJohn\n22\tJane\n");
        assert!(TsvFile::new(file.path(), Some(&id_name_patterns()), true).is_ok());
    }

    #[test]
    fn test_pattern_mismatch_identifies_column_and_values() {
        let file = create_tsv("id\tname\nabc\tJohn\n9\tJane\nx1\tMax\n");
        let result = TsvFile::new(file.path(), Some(&id_name_patterns()), true);

        match result.unwrap_err() {
            SeqprepError::PatternMismatch { column, values } => {
                assert_eq!(column, "id");
                assert_eq!(values, vec!["abc".to_string(), "x1".to_string()]);
            }
            other => panic!("Expected PatternMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_full_match_is_required() {
        // "12a" contains digits but is not entirely digits
        let file = create_tsv("12a\tJohn\n");
        let result = TsvFile::new(file.path(), Some(&id_name_patterns()), false);

        match result.unwrap_err() {
            SeqprepError::PatternMismatch { column, values } => {
                assert_eq!(column, "id");
                assert_eq!(values, vec!["12a".to_string()]);
            }
            other => panic!("Expected PatternMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_column_count_mismatch_reports_line() {
        let file = create_tsv("id\tname\n1\tJohn\n2\tJane\textra\n");
        let result = TsvFile::new(file.path(), Some(&id_name_patterns()), true);

        match result.unwrap_err() {
            SeqprepError::ColumnCount {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("Expected ColumnCount, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let file = create_tsv("1\tJohn\n");
        let patterns = vec![
            ("id".to_string(), r"(\d+".to_string()),
            ("name".to_string(), r".*".to_string()),
        ];
        let result = TsvFile::new(file.path(), Some(&patterns), false);

        match result.unwrap_err() {
            SeqprepError::InvalidPattern { column, .. } => assert_eq!(column, "id"),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_no_patterns_skips_validation() {
        let file = create_tsv("anything\tgoes\there\n");
        assert!(TsvFile::new(file.path(), None, false).is_ok());
    }

    #[test]
    fn test_as_df_types_and_order() {
        let file = create_tsv("id\tname\tratio\n1\tJohn\t0.5\n2\tJane\t1.5\n");
        let tsv = TsvFile::new(file.path(), None, true).unwrap();

        let dtypes = vec![
            ("id".to_string(), ColumnType::Integer),
            ("name".to_string(), ColumnType::Text),
            ("ratio".to_string(), ColumnType::Float),
        ];
        let table = tsv.as_df(&dtypes).unwrap();

        assert_eq!(table.columns(), ["id", "name", "ratio"]);
        assert_eq!(
            table.rows()[0],
            vec![
                FieldValue::Integer(1),
                FieldValue::Text("John".to_string()),
                FieldValue::Float(0.5),
            ]
        );
        assert_eq!(table.rows()[1][2], FieldValue::Float(1.5));
    }

    #[test]
    fn test_as_df_without_header_keeps_first_line() {
        let file = create_tsv("1\tJohn\n2\tJane\n");
        let tsv = TsvFile::new(file.path(), None, false).unwrap();

        let dtypes = vec![
            ("id".to_string(), ColumnType::Integer),
            ("name".to_string(), ColumnType::Text),
        ];
        assert_eq!(tsv.as_df(&dtypes).unwrap().len(), 2);
    }

    #[test]
    fn test_as_data_list_matches_as_df_rows() {
        let file = create_tsv("1\tJohn\n2\tJane\n");
        let tsv = TsvFile::new(file.path(), None, false).unwrap();

        let dtypes = vec![
            ("id".to_string(), ColumnType::Integer),
            ("name".to_string(), ColumnType::Text),
        ];
        let rows = tsv.as_data_list(&dtypes).unwrap();
        assert_eq!(rows, tsv.as_df(&dtypes).unwrap().into_rows());
    }

    #[test]
    fn test_as_df_rejects_unparsable_field() {
        let file = create_tsv("abc\tJohn\n");
        let tsv = TsvFile::new(file.path(), None, false).unwrap();

        let dtypes = vec![
            ("id".to_string(), ColumnType::Integer),
            ("name".to_string(), ColumnType::Text),
        ];
        match tsv.as_df(&dtypes).unwrap_err() {
            SeqprepError::FieldParse { column, value, .. } => {
                assert_eq!(column, "id");
                assert_eq!(value, "abc");
            }
            other => panic!("Expected FieldParse, got {other:?}"),
        }
    }
}
