use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutConfig, Seat};

/// Passenger seating preferences. `None` and `Some(false)` both mean
/// "no preference".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPreferences {
    pub window: Option<bool>,
    pub extra_legroom: Option<bool>,
    pub near_exit: Option<bool>,
}

impl SeatPreferences {
    /// A seat qualifies when it satisfies every requested preference.
    pub fn accepts(&self, seat: &Seat) -> bool {
        let attrs = &seat.attributes;
        (!self.window.unwrap_or(false) || attrs.is_window)
            && (!self.extra_legroom.unwrap_or(false) || attrs.has_extra_legroom)
            && (!self.near_exit.unwrap_or(false) || attrs.is_near_exit)
    }
}

/// Non-positive party sizes are treated as a single passenger.
pub fn party_size(requested: i32) -> usize {
    requested.max(1) as usize
}

/// Picks `party_size` seats from `free_seats` sitting side by side in one row.
///
/// Rows are scanned front to back and each row left to right; the first run
/// of `party_size` candidates with adjacent columns wins. Returns an empty
/// list when no row holds such a run or when no seat passes the preferences.
pub fn recommend_seats<'a>(
    layout: &LayoutConfig,
    free_seats: &'a [Seat],
    party_size: usize,
    preferences: &SeatPreferences,
) -> Vec<&'a Seat> {
    let party_size = party_size.max(1);

    let mut by_row: BTreeMap<u32, Vec<(usize, &Seat)>> = BTreeMap::new();
    for seat in free_seats.iter().filter(|s| preferences.accepts(s)) {
        let index = layout.column_index(seat.column).unwrap_or(usize::MAX);
        by_row.entry(seat.row).or_default().push((index, seat));
    }

    if by_row.is_empty() {
        return Vec::new();
    }

    for row_seats in by_row.values_mut() {
        row_seats.sort_by_key(|(index, _)| *index);
    }

    for row_seats in by_row.values() {
        if row_seats.len() < party_size {
            continue;
        }
        if let Some(block) = row_seats.windows(party_size).find(|w| is_contiguous(w)) {
            return block.iter().map(|(_, seat)| *seat).collect();
        }
    }

    // A single passenger never needs contiguity, so the loop above already
    // returned the first candidate. Larger parties are never split.
    Vec::new()
}

fn is_contiguous(block: &[(usize, &Seat)]) -> bool {
    block.windows(2).all(|pair| pair[0].0.checked_add(1) == Some(pair[1].0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn free(layout: &LayoutConfig, occupied: &[&str]) -> Vec<Seat> {
        let occupied: BTreeSet<String> = occupied.iter().map(|s| s.to_string()).collect();
        layout
            .generate_seats(&occupied)
            .into_iter()
            .filter(|s| !s.is_occupied)
            .collect()
    }

    fn nrs(seats: &[&Seat]) -> Vec<String> {
        seats.iter().map(|s| s.seat_nr.clone()).collect()
    }

    #[test]
    fn test_single_passenger_gets_first_free_seat() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &["1A", "1B"]);

        let picked = recommend_seats(&layout, &seats, 1, &SeatPreferences::default());
        assert_eq!(nrs(&picked), vec!["1C"]);
    }

    #[test]
    fn test_first_contiguous_window_wins() {
        let layout = LayoutConfig { total_rows: 1, ..LayoutConfig::default() };
        let seats = free(&layout, &["1A", "1E"]);

        let picked = recommend_seats(&layout, &seats, 3, &SeatPreferences::default());
        assert_eq!(nrs(&picked), vec!["1B", "1C", "1D"]);
    }

    #[test]
    fn test_gapped_seats_are_never_grouped() {
        let layout = LayoutConfig { total_rows: 1, ..LayoutConfig::default() };
        let seats = free(&layout, &["1A", "1C", "1E"]);

        let picked = recommend_seats(&layout, &seats, 3, &SeatPreferences::default());
        assert!(picked.is_empty());

        let picked = recommend_seats(&layout, &seats, 2, &SeatPreferences::default());
        assert!(picked.is_empty());
    }

    #[test]
    fn test_skips_rows_without_a_block() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &["1B", "1E", "2A", "2B", "2C", "2D"]);

        let picked = recommend_seats(&layout, &seats, 3, &SeatPreferences::default());
        assert_eq!(nrs(&picked), vec!["3A", "3B", "3C"]);
    }

    #[test]
    fn test_preferences_are_anded() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &[]);
        let prefs = SeatPreferences {
            window: Some(true),
            near_exit: Some(true),
            ..SeatPreferences::default()
        };

        let picked = recommend_seats(&layout, &seats, 1, &prefs);
        assert_eq!(nrs(&picked), vec!["1A"]);

        let prefs = SeatPreferences {
            window: Some(true),
            extra_legroom: Some(true),
            near_exit: Some(true),
        };
        let picked = recommend_seats(&layout, &seats, 1, &prefs);
        assert_eq!(nrs(&picked), vec!["12A"]);
    }

    #[test]
    fn test_false_preference_imposes_nothing() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &[]);
        let prefs = SeatPreferences {
            window: Some(false),
            extra_legroom: Some(false),
            near_exit: Some(false),
        };

        let picked = recommend_seats(&layout, &seats, 1, &prefs);
        assert_eq!(nrs(&picked), vec!["1A"]);
    }

    #[test]
    fn test_unmatched_preference_returns_empty() {
        let layout = LayoutConfig::default();
        let occupied: Vec<String> = (10..=12)
            .flat_map(|row| layout.columns.iter().map(move |c| format!("{}{}", row, c)))
            .collect();
        let occupied: Vec<&str> = occupied.iter().map(String::as_str).collect();
        let seats = free(&layout, &occupied);
        let prefs = SeatPreferences { extra_legroom: Some(true), ..SeatPreferences::default() };

        assert!(recommend_seats(&layout, &seats, 1, &prefs).is_empty());
    }

    #[test]
    fn test_window_preference_cannot_seat_a_pair() {
        // Window seats sit at opposite ends of each row.
        let layout = LayoutConfig::default();
        let seats = free(&layout, &[]);
        let prefs = SeatPreferences { window: Some(true), ..SeatPreferences::default() };

        assert!(recommend_seats(&layout, &seats, 2, &prefs).is_empty());
    }

    #[test]
    fn test_party_larger_than_row_is_empty() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &[]);

        assert!(recommend_seats(&layout, &seats, 7, &SeatPreferences::default()).is_empty());
    }

    #[test]
    fn test_contiguity_uses_configured_column_order() {
        // No 'C': B and D are neighbours in this cabin.
        let layout = LayoutConfig {
            total_rows: 1,
            columns: vec!['A', 'B', 'D', 'E'],
            ..LayoutConfig::default()
        };
        let seats = free(&layout, &["1A"]);

        let picked = recommend_seats(&layout, &seats, 3, &SeatPreferences::default());
        assert_eq!(nrs(&picked), vec!["1B", "1D", "1E"]);
    }

    #[test]
    fn test_party_size_coercion() {
        assert_eq!(party_size(0), 1);
        assert_eq!(party_size(-4), 1);
        assert_eq!(party_size(3), 3);
    }

    #[test]
    fn test_free_seat_list_is_untouched() {
        let layout = LayoutConfig::default();
        let seats = free(&layout, &["1A"]);
        let before = seats.clone();

        let _ = recommend_seats(&layout, &seats, 4, &SeatPreferences::default());
        assert_eq!(seats, before);
    }
}
