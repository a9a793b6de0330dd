use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Cabin geometry shared by every flight.
///
/// Every field falls back to the narrow-body default, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub total_rows: u32,
    /// Column letters, left to right.
    pub columns: Vec<char>,
    pub exit_rows: BTreeSet<u32>,
    pub extra_legroom_rows: BTreeSet<u32>,
    /// Rows `1..=first_class_last_row` are first class.
    pub first_class_last_row: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_rows: 25,
            columns: vec!['A', 'B', 'C', 'D', 'E', 'F'],
            exit_rows: BTreeSet::from([1, 12, 24]),
            extra_legroom_rows: BTreeSet::from([10, 11, 12]),
            first_class_last_row: 2,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.total_rows == 0 {
            return Err(CoreError::ValidationError("layout needs at least one row".to_string()));
        }
        if self.columns.is_empty() {
            return Err(CoreError::ValidationError("layout needs at least one column".to_string()));
        }

        let mut seen = HashSet::new();
        for &column in &self.columns {
            if !column.is_ascii_uppercase() {
                return Err(CoreError::ValidationError(format!(
                    "column '{}' is not an uppercase letter",
                    column
                )));
            }
            if !seen.insert(column) {
                return Err(CoreError::ValidationError(format!("column '{}' listed twice", column)));
            }
        }

        Ok(())
    }

    /// Position of `column` in the configured left-to-right order.
    pub fn column_index(&self, column: char) -> Option<usize> {
        self.columns.iter().position(|&c| c == column)
    }

    pub fn seat_count(&self) -> usize {
        self.total_rows as usize * self.columns.len()
    }

    /// Every seat identifier of the layout in row-major order.
    pub fn seat_nrs(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.total_rows).flat_map(move |row| self.columns.iter().map(move |&column| seat_nr(row, column)))
    }

    /// Static attributes of the seat at `(row, column)`.
    pub fn classify(&self, row: u32, column: char) -> SeatAttributes {
        SeatAttributes {
            is_window: self.columns.first() == Some(&column) || self.columns.last() == Some(&column),
            has_extra_legroom: self.extra_legroom_rows.contains(&row),
            is_near_exit: self.exit_rows.contains(&row),
            is_first_class: row <= self.first_class_last_row,
        }
    }

    /// Builds the full seat grid, one seat per `(row, column)` cell, ordered by
    /// row then by configured column order.
    ///
    /// Occupied identifiers that match no generated seat are ignored.
    pub fn generate_seats(&self, occupied_seat_nrs: &BTreeSet<String>) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.seat_count());

        for row in 1..=self.total_rows {
            for &column in &self.columns {
                let seat_nr = seat_nr(row, column);
                let is_occupied = occupied_seat_nrs.contains(&seat_nr);
                seats.push(Seat {
                    seat_nr,
                    row,
                    column,
                    attributes: self.classify(row, column),
                    is_occupied,
                });
            }
        }

        seats
    }
}

/// `12` + `'A'` -> `"12A"`
pub fn seat_nr(row: u32, column: char) -> String {
    format!("{}{}", row, column)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatAttributes {
    pub is_window: bool,
    pub has_extra_legroom: bool,
    pub is_near_exit: bool,
    pub is_first_class: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub seat_nr: String,
    pub row: u32,
    pub column: char,
    #[serde(flatten)]
    pub attributes: SeatAttributes,
    pub is_occupied: bool,
}
