//! Column directory
//!
//! The columns of one sheet, indexed by id, by title and by position. The three
//! indices are always rebuilt together from a single column list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SmartsheetError, SmartsheetResult};
use crate::models::Column;

/// Column lookup by id, title or position
///
/// Titles are expected to be unique within a sheet. If a sheet has duplicate
/// titles the last column with that title wins the title slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDirectory {
    by_id: BTreeMap<i64, Column>,
    by_title: BTreeMap<String, i64>,
    by_index: BTreeMap<usize, i64>,
}

impl ColumnDirectory {
    /// Build all three indices from a column list
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut directory = Self::default();
        for column in columns {
            if let Some(previous) = directory.by_title.get(&column.title) {
                tracing::warn!(
                    "Duplicate column title '{}': column {} replaces {}",
                    column.title,
                    column.id,
                    previous
                );
            }
            directory.by_title.insert(column.title.clone(), column.id);
            directory.by_index.insert(column.index, column.id);
            directory.by_id.insert(column.id, column);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Entry counts of the id, title and position indices
    pub fn index_sizes(&self) -> (usize, usize, usize) {
        (self.by_id.len(), self.by_title.len(), self.by_index.len())
    }

    pub fn by_id(&self, id: i64) -> Option<&Column> {
        self.by_id.get(&id)
    }

    pub fn by_title(&self, title: &str) -> Option<&Column> {
        self.by_title.get(title).and_then(|id| self.by_id.get(id))
    }

    pub fn by_index(&self, index: usize) -> Option<&Column> {
        self.by_index.get(&index).and_then(|id| self.by_id.get(id))
    }

    /// Column id for a title
    pub fn column_id(&self, title: &str) -> SmartsheetResult<i64> {
        self.by_title
            .get(title)
            .copied()
            .ok_or_else(|| SmartsheetError::UnknownColumn(title.to_string()))
    }

    /// Columns in sheet order
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.by_index.values().filter_map(|id| self.by_id.get(id))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|column| column.title.as_str())
    }

    /// True when every title and position entry points at a column with that title
    /// and position, and every column has a position
    pub fn is_consistent(&self) -> bool {
        let titles_agree = self
            .by_title
            .iter()
            .all(|(title, id)| self.by_id.get(id).is_some_and(|c| &c.title == title));
        let positions_agree = self
            .by_index
            .iter()
            .all(|(index, id)| self.by_id.get(id).is_some_and(|c| c.index == *index));
        let ids_agree = self.by_id.iter().all(|(id, c)| c.id == *id);

        titles_agree && positions_agree && ids_agree && self.by_index.len() == self.by_id.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new(100, 0, "Address", "TEXT_NUMBER").primary(),
            Column::new(101, 1, "Level", "TEXT_NUMBER"),
            Column::new(102, 2, "Status", "PICKLIST")
                .with_options(vec!["Red".to_string(), "Green".to_string()]),
        ]
    }

    #[test]
    fn test_indices_agree() {
        let directory = ColumnDirectory::from_columns(columns());
        assert_eq!(directory.index_sizes(), (3, 3, 3));
        assert!(directory.is_consistent());

        for column in columns() {
            assert_eq!(directory.by_id(column.id), Some(&column));
            assert_eq!(directory.by_title(&column.title), Some(&column));
            assert_eq!(directory.by_index(column.index), Some(&column));
        }
    }

    #[test]
    fn test_iter_in_sheet_order() {
        let mut reversed = columns();
        reversed.reverse();
        let directory = ColumnDirectory::from_columns(reversed);
        let titles: Vec<_> = directory.titles().collect();
        assert_eq!(titles, vec!["Address", "Level", "Status"]);
    }

    #[test]
    fn test_unknown_title() {
        let directory = ColumnDirectory::from_columns(columns());
        assert_eq!(directory.column_id("Level").unwrap(), 101);
        match directory.column_id("Colour") {
            Err(SmartsheetError::UnknownColumn(title)) => assert_eq!(title, "Colour"),
            other => panic!("Expected unknown column, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_title_last_wins() {
        let directory = ColumnDirectory::from_columns(vec![
            Column::new(1, 0, "Notes", "TEXT_NUMBER"),
            Column::new(2, 1, "Notes", "TEXT_NUMBER"),
        ]);
        assert_eq!(directory.column_id("Notes").unwrap(), 2);
        assert_eq!(directory.index_sizes(), (2, 1, 2));
        assert!(directory.is_consistent());
    }

    #[test]
    fn test_empty_directory() {
        let directory = ColumnDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.is_consistent());
        assert_eq!(directory.iter().count(), 0);
    }
}
