//! Sheet comparison
//!
//! Checks that a sheet still has the structure a caller expects: same identity and
//! the same columns (id, title and type). Rows are not compared.

use std::fmt;

use super::SheetInfo;

/// First difference found between a sheet and its reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetMismatch {
    SheetId { expected: i64, actual: i64 },
    SheetName { expected: String, actual: String },
    ColumnCount { expected: usize, actual: usize },
    MissingColumn { id: i64, title: String },
    ColumnTitle { id: i64, expected: String, actual: String },
    ColumnType { id: i64, expected: String, actual: String },
}

impl fmt::Display for SheetMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SheetId { expected, actual } => {
                write!(f, "sheet id differs: expected {}, got {}", expected, actual)
            }
            Self::SheetName { expected, actual } => {
                write!(f, "sheet name differs: expected '{}', got '{}'", expected, actual)
            }
            Self::ColumnCount { expected, actual } => {
                write!(f, "column count differs: expected {}, got {}", expected, actual)
            }
            Self::MissingColumn { id, title } => {
                write!(f, "column {} ('{}') is missing", id, title)
            }
            Self::ColumnTitle {
                id,
                expected,
                actual,
            } => write!(
                f,
                "column {} title differs: expected '{}', got '{}'",
                id, expected, actual
            ),
            Self::ColumnType {
                id,
                expected,
                actual,
            } => write!(
                f,
                "column {} type differs: expected {}, got {}",
                id, expected, actual
            ),
        }
    }
}

impl SheetInfo {
    /// First structural difference from `reference`, checked in order: sheet id, sheet
    /// name, column count, then each reference column in sheet order
    pub fn find_mismatch(&self, reference: &SheetInfo) -> Option<SheetMismatch> {
        if self.sheet_id != reference.sheet_id {
            return Some(SheetMismatch::SheetId {
                expected: reference.sheet_id,
                actual: self.sheet_id,
            });
        }
        if self.sheet_name != reference.sheet_name {
            return Some(SheetMismatch::SheetName {
                expected: reference.sheet_name.clone(),
                actual: self.sheet_name.clone(),
            });
        }
        if self.columns.len() != reference.columns.len() {
            return Some(SheetMismatch::ColumnCount {
                expected: reference.columns.len(),
                actual: self.columns.len(),
            });
        }

        for expected in reference.columns.iter() {
            let Some(actual) = self.columns.by_id(expected.id) else {
                return Some(SheetMismatch::MissingColumn {
                    id: expected.id,
                    title: expected.title.clone(),
                });
            };
            if actual.title != expected.title {
                return Some(SheetMismatch::ColumnTitle {
                    id: expected.id,
                    expected: expected.title.clone(),
                    actual: actual.title.clone(),
                });
            }
            if actual.column_type != expected.column_type {
                return Some(SheetMismatch::ColumnType {
                    id: expected.id,
                    expected: expected.column_type.clone(),
                    actual: actual.column_type.clone(),
                });
            }
        }
        None
    }

    /// True when the sheet has the structure of `reference`; a mismatch is logged
    pub fn match_sheet(&self, reference: &SheetInfo) -> bool {
        match self.find_mismatch(reference) {
            Some(mismatch) => {
                tracing::warn!("Sheet {} does not match: {}", self.sheet_id, mismatch);
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn reference() -> SheetInfo {
        SheetInfo::with_columns(
            7,
            "Sites",
            vec![
                Column::new(100, 0, "Address", "TEXT_NUMBER").primary(),
                Column::new(101, 1, "Level", "TEXT_NUMBER"),
                Column::new(102, 2, "Due", "DATE"),
            ],
        )
    }

    #[test]
    fn test_matches_itself() {
        let sheet = reference();
        assert!(sheet.match_sheet(&sheet));
        assert_eq!(sheet.find_mismatch(&sheet), None);
    }

    #[test]
    fn test_rows_are_ignored() {
        let mut candidate = reference();
        candidate.rows.push(crate::models::Row::existing(5));
        assert!(candidate.match_sheet(&reference()));
    }

    #[test]
    fn test_sheet_id_checked_first() {
        let mut candidate = reference();
        candidate.sheet_id = 8;
        candidate.sheet_name = "Other".to_string();
        assert_eq!(
            candidate.find_mismatch(&reference()),
            Some(SheetMismatch::SheetId {
                expected: 7,
                actual: 8
            })
        );
    }

    #[test]
    fn test_name_and_count() {
        let mut candidate = reference();
        candidate.sheet_name = "Sites v2".to_string();
        assert!(matches!(
            candidate.find_mismatch(&reference()),
            Some(SheetMismatch::SheetName { .. })
        ));

        let candidate = SheetInfo::with_columns(
            7,
            "Sites",
            vec![Column::new(100, 0, "Address", "TEXT_NUMBER")],
        );
        assert_eq!(
            candidate.find_mismatch(&reference()),
            Some(SheetMismatch::ColumnCount {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_column_differences() {
        let renamed = SheetInfo::with_columns(
            7,
            "Sites",
            vec![
                Column::new(100, 0, "Address", "TEXT_NUMBER"),
                Column::new(101, 1, "Tier", "TEXT_NUMBER"),
                Column::new(102, 2, "Due", "TEXT_NUMBER"),
            ],
        );
        // title of column 101 is reported before the type of 102
        assert_eq!(
            renamed.find_mismatch(&reference()),
            Some(SheetMismatch::ColumnTitle {
                id: 101,
                expected: "Level".to_string(),
                actual: "Tier".to_string()
            })
        );

        let retyped = SheetInfo::with_columns(
            7,
            "Sites",
            vec![
                Column::new(100, 0, "Address", "TEXT_NUMBER"),
                Column::new(101, 1, "Level", "TEXT_NUMBER"),
                Column::new(102, 2, "Due", "TEXT_NUMBER"),
            ],
        );
        assert!(!retyped.match_sheet(&reference()));
        assert!(matches!(
            retyped.find_mismatch(&reference()),
            Some(SheetMismatch::ColumnType { id: 102, .. })
        ));

        let replaced = SheetInfo::with_columns(
            7,
            "Sites",
            vec![
                Column::new(100, 0, "Address", "TEXT_NUMBER"),
                Column::new(101, 1, "Level", "TEXT_NUMBER"),
                Column::new(999, 2, "Due", "DATE"),
            ],
        );
        assert!(matches!(
            replaced.find_mismatch(&reference()),
            Some(SheetMismatch::MissingColumn { id: 102, .. })
        ));
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = SheetMismatch::ColumnType {
            id: 102,
            expected: "DATE".to_string(),
            actual: "TEXT_NUMBER".to_string(),
        };
        assert_eq!(
            mismatch.to_string(),
            "column 102 type differs: expected DATE, got TEXT_NUMBER"
        );
    }
}
