use std::sync::Arc;

use flightplan_core::repository::FlightRepository;
use flightplan_core::SeatService;

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub seat_service: Arc<SeatService>,
}
