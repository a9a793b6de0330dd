use async_trait::async_trait;

use crate::flight::Flight;
use crate::search::FlightSearchQuery;
use crate::CoreResult;

/// Repository trait for flight data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn find_flights(&self, query: &FlightSearchQuery) -> CoreResult<Vec<Flight>>;

    async fn find_flight_by_id(&self, id: u64) -> CoreResult<Option<Flight>>;
}
