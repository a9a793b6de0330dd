use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flight::Flight;
use crate::layout::{LayoutConfig, Seat, SeatAttributes};
use crate::pricing::{compute_booking_price, BookingQuote, PricingError};
use crate::recommend::{party_size, recommend_seats, SeatPreferences};
use crate::CoreResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMapResponse {
    pub total_rows: u32,
    pub columns: Vec<char>,
    pub all_seats: Vec<Seat>,
    pub recommended_seat_nrs: Vec<String>,
}

/// Seat map, classification and pricing over one cabin layout.
///
/// Seat attributes never depend on bookings, so they are tabulated once at
/// construction and shared by every lookup.
#[derive(Debug, Clone)]
pub struct SeatService {
    layout: LayoutConfig,
    first_class_surcharge: i64,
    attributes: HashMap<String, SeatAttributes>,
}

impl SeatService {
    pub fn new(layout: LayoutConfig, first_class_surcharge: i64) -> CoreResult<Self> {
        layout.validate()?;

        let attributes = layout
            .generate_seats(&Default::default())
            .into_iter()
            .map(|seat| (seat.seat_nr, seat.attributes))
            .collect();

        Ok(Self {
            layout,
            first_class_surcharge,
            attributes,
        })
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn first_class_surcharge(&self) -> i64 {
        self.first_class_surcharge
    }

    /// Full seat grid for `flight` plus a recommended block for the party.
    pub fn seat_map(&self, flight: &Flight, requested_party_size: i32, preferences: SeatPreferences) -> SeatMapResponse {
        let all_seats = self.layout.generate_seats(&flight.occupied_seat_nrs);
        let free_seats: Vec<Seat> = all_seats.iter().filter(|s| !s.is_occupied).cloned().collect();

        let recommended_seat_nrs = recommend_seats(
            &self.layout,
            &free_seats,
            party_size(requested_party_size),
            &preferences,
        )
        .into_iter()
        .map(|seat| seat.seat_nr.clone())
        .collect();

        SeatMapResponse {
            total_rows: self.layout.total_rows,
            columns: self.layout.columns.clone(),
            all_seats,
            recommended_seat_nrs,
        }
    }

    /// `None` when `seat_nr` is not a seat of the flight's layout.
    pub fn is_seat_first_class(&self, _flight: &Flight, seat_nr: &str) -> Option<bool> {
        self.attributes.get(seat_nr).map(|attrs| attrs.is_first_class)
    }

    pub fn booking_price(
        &self,
        flight: &Flight,
        passenger_count: u32,
        selected_seats: &[String],
    ) -> Result<BookingQuote, PricingError> {
        compute_booking_price(
            flight,
            passenger_count,
            selected_seats,
            self.first_class_surcharge,
            |seat_nr| self.is_seat_first_class(flight, seat_nr),
        )
    }
}
