use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use flightplan_core::repository::FlightRepository;
use flightplan_core::search::FlightSearchQuery;
use flightplan_core::{CoreError, CoreResult, Flight, LayoutConfig};
use rand::seq::SliceRandom;
use rand::Rng;

const DESTINATIONS: [&str; 5] = ["WAW", "RIX", "HEL", "ARN", "OSL"];
const ORIGINS: [&str; 2] = ["TLL", "RIX"];
const AIRCRAFT: [&str; 3] = ["Boeing 737", "Airbus A320", "ATR 72"];
const SAMPLE_FLIGHTS: u64 = 20;

/// Flight collaborator backed by a fixed in-process list.
///
/// Records are handed out as clones, so callers always work on a snapshot.
pub struct InMemoryFlightRepository {
    flights: Vec<Flight>,
}

impl InMemoryFlightRepository {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// Sample schedule with a random share of seats already booked.
    pub fn seeded(layout: &LayoutConfig, occupancy_rate: f64, currency: &str) -> CoreResult<Self> {
        Self::seeded_with_rng(layout, occupancy_rate, currency, &mut rand::thread_rng())
    }

    pub fn seeded_with_rng<R: Rng + ?Sized>(
        layout: &LayoutConfig,
        occupancy_rate: f64,
        currency: &str,
        rng: &mut R,
    ) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&occupancy_rate) {
            return Err(CoreError::ValidationError(format!(
                "occupancy rate {} outside 0..=1",
                occupancy_rate
            )));
        }

        let base_time = at(2025, 4, 1, 10, 30)?;
        let mut flights = Vec::with_capacity(SAMPLE_FLIGHTS as usize + 1);

        for i in 0..SAMPLE_FLIGHTS {
            let idx = i as usize;
            let departure = base_time + Duration::days((i % 5) as i64) + Duration::hours((i % 3) as i64);
            let arrival = departure + Duration::minutes(70 + (i * 3 % 55) as i64);

            flights.push(Flight {
                id: i + 1,
                flight_nr: format!("FL{}", 100 + i),
                origin: ORIGINS[idx % ORIGINS.len()].to_string(),
                destination: DESTINATIONS[idx % DESTINATIONS.len()].to_string(),
                departure_time: departure,
                arrival_time: arrival,
                price_amount: Some(9500 + 250 * i as i64),
                price_currency: currency.to_string(),
                aircraft_type: AIRCRAFT[idx % AIRCRAFT.len()].to_string(),
                occupied_seat_nrs: random_occupied(layout, occupancy_rate, rng),
            });
        }

        flights.push(Flight {
            id: SAMPLE_FLIGHTS + 1,
            flight_nr: "BT123".to_string(),
            origin: "TLL".to_string(),
            destination: "WAW".to_string(),
            departure_time: at(2025, 5, 10, 10, 0)?,
            arrival_time: at(2025, 5, 10, 11, 30)?,
            price_amount: Some(15000),
            price_currency: currency.to_string(),
            aircraft_type: "Boeing 737".to_string(),
            occupied_seat_nrs: random_occupied(layout, occupancy_rate, rng),
        });

        tracing::info!("Seeded {} sample flights", flights.len());
        Ok(Self::new(flights))
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CoreResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| CoreError::InternalError(format!("invalid timestamp {}-{}-{}", year, month, day)))
}

fn random_occupied<R: Rng + ?Sized>(layout: &LayoutConfig, occupancy_rate: f64, rng: &mut R) -> BTreeSet<String> {
    let mut seat_nrs: Vec<String> = layout.seat_nrs().collect();
    let count = (seat_nrs.len() as f64 * occupancy_rate) as usize;

    seat_nrs.shuffle(rng);
    seat_nrs.truncate(count);
    seat_nrs.into_iter().collect()
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn find_flights(&self, query: &FlightSearchQuery) -> CoreResult<Vec<Flight>> {
        Ok(self.flights.iter().filter(|f| query.matches(f)).cloned().collect())
    }

    async fn find_flight_by_id(&self, id: u64) -> CoreResult<Option<Flight>> {
        Ok(self.flights.iter().find(|f| f.id == id).cloned())
    }
}
