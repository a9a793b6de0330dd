use serde::Deserialize;

use crate::flight::Flight;

/// Flight listing filters. Every criterion is optional; a flight matches when
/// it satisfies all of the ones given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchQuery {
    pub destination: Option<String>,
    pub date: Option<chrono::NaiveDate>, // Departure date, time ignored
    pub max_duration_minutes: Option<i64>,
    /// Ceiling on the base fare in minor units.
    pub max_price: Option<i64>,
}

impl FlightSearchQuery {
    pub fn matches(&self, flight: &Flight) -> bool {
        if let Some(destination) = &self.destination {
            if !flight.destination.eq_ignore_ascii_case(destination) {
                return false;
            }
        }
        if let Some(date) = self.date {
            if flight.departure_time.date() != date {
                return false;
            }
        }
        if let Some(max_minutes) = self.max_duration_minutes {
            if flight.duration().num_minutes() > max_minutes {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            // A flight without a fare cannot be shown under a price ceiling.
            match flight.price_amount {
                Some(price) if price <= max_price => {}
                _ => return false,
            }
        }
        true
    }
}
