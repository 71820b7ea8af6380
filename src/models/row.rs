//! Row model and row placement

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cell::Cell;

/// Lock flag carried by a row
///
/// Absence is different from `false`: `Unset` leaves the lock unchanged, `Unlocked`
/// clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unset,
    Locked,
    Unlocked,
}

impl LockState {
    pub fn is_unset(&self) -> bool {
        matches!(self, LockState::Unset)
    }

    /// Wire value, `None` when nothing should be sent
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LockState::Unset => None,
            LockState::Locked => Some(true),
            LockState::Unlocked => Some(false),
        }
    }
}

impl From<Option<bool>> for LockState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => LockState::Unset,
            Some(true) => LockState::Locked,
            Some(false) => LockState::Unlocked,
        }
    }
}

impl Serialize for LockState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_bool().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LockState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.into())
    }
}

/// A sheet row
///
/// `id` is 0 for rows that have not been created yet.
///
/// # Example
///
/// ```rust
/// use smartsheet_sdk::models::{Cell, LockState, Row};
///
/// let row = Row::new(vec![Cell::new("Address", "400 Ringo"), Cell::new("Level", "0")]);
/// let update = Row::existing(7803652731365252)
///     .with_cells(vec![Cell::new("Status", "Red")])
///     .with_lock(LockState::Unlocked);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default, skip_serializing_if = "LockState::is_unset")]
    pub locked: LockState,
    /// Position in the sheet, as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<u32>,
    /// Parent row, as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl Row {
    /// New row, not yet created
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            ..Self::default()
        }
    }

    /// Row that already exists in the sheet (for updates)
    pub fn existing(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_cells(mut self, cells: Vec<Cell>) -> Self {
        self.cells = cells;
        self
    }

    pub fn with_lock(mut self, locked: LockState) -> Self {
        self.locked = locked;
        self
    }

    /// Cell for the given column id
    pub fn cell(&self, column_id: i64) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.column_id == column_id)
    }
}

/// Where added or moved rows land in the sheet
///
/// Only one of `to_top`, `to_bottom`, `parent_id`, `sibling_id` should be set; the
/// combination is not validated. Inactive fields are not sent. Inserts fall back to
/// bottom-of-sheet when nothing is set, updates leave rows where they are.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RowLocation {
    #[serde(default, skip_serializing_if = "is_false")]
    pub to_top: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub to_bottom: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub parent_id: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub sibling_id: i64,
    /// With `sibling_id`: place above the sibling instead of below
    #[serde(default, skip_serializing_if = "is_false")]
    pub above: bool,
    #[serde(default, skip_serializing_if = "is_false", serialize_with = "flag_as_one", deserialize_with = "flag_from_number")]
    pub indent: bool,
    #[serde(default, skip_serializing_if = "is_false", serialize_with = "flag_as_one", deserialize_with = "flag_from_number")]
    pub outdent: bool,
}

impl RowLocation {
    pub fn top() -> Self {
        Self {
            to_top: true,
            ..Self::default()
        }
    }

    pub fn bottom() -> Self {
        Self {
            to_bottom: true,
            ..Self::default()
        }
    }

    /// First child of the given parent
    pub fn under_parent(parent_id: i64) -> Self {
        Self {
            parent_id,
            ..Self::default()
        }
    }

    /// Last child of the given parent
    pub fn bottom_of_parent(parent_id: i64) -> Self {
        Self {
            parent_id,
            to_bottom: true,
            ..Self::default()
        }
    }

    pub fn below_sibling(sibling_id: i64) -> Self {
        Self {
            sibling_id,
            ..Self::default()
        }
    }

    pub fn above_sibling(sibling_id: i64) -> Self {
        Self {
            sibling_id,
            above: true,
            ..Self::default()
        }
    }

    pub fn indent() -> Self {
        Self {
            indent: true,
            ..Self::default()
        }
    }

    pub fn outdent() -> Self {
        Self {
            outdent: true,
            ..Self::default()
        }
    }

    /// True when no field is active
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn flag_as_one<S: Serializer>(_: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(1)
}

fn flag_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(u8::deserialize(deserializer)? != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_state_from_option() {
        assert_eq!(LockState::from(None), LockState::Unset);
        assert_eq!(LockState::from(Some(true)), LockState::Locked);
        assert_eq!(LockState::from(Some(false)), LockState::Unlocked);
        assert_eq!(LockState::Unlocked.as_bool(), Some(false));
    }

    #[test]
    fn test_row_omits_unset_lock() {
        let row = Row::existing(5);
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("locked").is_none());

        let row = Row::existing(5).with_lock(LockState::Unlocked);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["locked"], false);
    }

    #[test]
    fn test_row_deserialize_response() {
        let json = r#"{
            "id": 2858796753938308,
            "rowNumber": 4,
            "parentId": 7803652731365252,
            "locked": true,
            "expanded": true,
            "cells": [{"columnId": 1, "value": "Elec"}]
        }"#;
        let row: Row = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, 2858796753938308);
        assert_eq!(row.row_number, Some(4));
        assert_eq!(row.parent_id, Some(7803652731365252));
        assert_eq!(row.locked, LockState::Locked);
        assert!(row.cell(1).is_some());
        assert!(row.cell(2).is_none());
    }

    #[test]
    fn test_location_only_sends_active_fields() {
        let json = serde_json::to_value(RowLocation::bottom()).unwrap();
        assert_eq!(json, serde_json::json!({"toBottom": true}));

        let json = serde_json::to_value(RowLocation::above_sibling(77)).unwrap();
        assert_eq!(json, serde_json::json!({"siblingId": 77, "above": true}));

        let json = serde_json::to_value(RowLocation::indent()).unwrap();
        assert_eq!(json, serde_json::json!({"indent": 1}));

        let json = serde_json::to_value(RowLocation::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_location_is_empty() {
        assert!(RowLocation::default().is_empty());
        assert!(!RowLocation::top().is_empty());
        assert!(!RowLocation::outdent().is_empty());
    }
}
