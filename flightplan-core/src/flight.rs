use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Flight record as held by the flight collaborator.
///
/// The seat core only reads `price_amount` and `occupied_seat_nrs`; both are
/// treated as a snapshot for the duration of one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: u64,
    pub flight_nr: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// Base fare per passenger in minor units.
    pub price_amount: Option<i64>,
    pub price_currency: String,
    pub aircraft_type: String,
    #[serde(default)]
    pub occupied_seat_nrs: BTreeSet<String>,
}

impl Flight {
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }
}
