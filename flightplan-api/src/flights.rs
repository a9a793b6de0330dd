use axum::{extract::State, routing::get, Json, Router};
use flightplan_core::search::FlightSearchQuery;
use flightplan_core::{Flight, SeatMapResponse, SeatPreferences};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SeatMapParams {
    #[serde(default = "default_passengers")]
    pub number_of_passengers: i32,
    pub prefer_window: Option<bool>,
    pub prefer_extra_legroom: Option<bool>,
    pub prefer_near_exit: Option<bool>,
}

fn default_passengers() -> i32 { 1 }

impl SeatMapParams {
    fn preferences(&self) -> SeatPreferences {
        SeatPreferences {
            window: self.prefer_window,
            extra_legroom: self.prefer_extra_legroom,
            near_exit: self.prefer_near_exit,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(list_flights))
        .route("/api/flights/{flight_id}", get(get_flight))
        .route("/api/flights/{flight_id}/seats", get(get_seat_map))
}

/// Resolves a flight id or fails with 404.
pub(crate) async fn load_flight(state: &AppState, flight_id: u64) -> Result<Flight, AppError> {
    state
        .flight_repo
        .find_flight_by_id(flight_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found with ID: {}", flight_id)))
}

/// GET /api/flights
async fn list_flights(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FlightSearchQuery>,
) -> Result<Json<Vec<Flight>>, AppError> {
    info!("Fetching flights matching {:?}", query);
    let flights = state.flight_repo.find_flights(&query).await?;
    Ok(Json(flights))
}

/// GET /api/flights/{flight_id}
async fn get_flight(
    State(state): State<AppState>,
    AppPath(flight_id): AppPath<u64>,
) -> Result<Json<Flight>, AppError> {
    info!("Fetching single flight with an ID: {}", flight_id);
    Ok(Json(load_flight(&state, flight_id).await?))
}

/// GET /api/flights/{flight_id}/seats
async fn get_seat_map(
    State(state): State<AppState>,
    AppPath(flight_id): AppPath<u64>,
    AppQuery(params): AppQuery<SeatMapParams>,
) -> Result<Json<SeatMapResponse>, AppError> {
    info!("Fetching seat map for flight with an ID: {}", flight_id);
    let flight = load_flight(&state, flight_id).await?;

    let seat_map = state
        .seat_service
        .seat_map(&flight, params.number_of_passengers, params.preferences());

    if seat_map.recommended_seat_nrs.is_empty() {
        info!("No seat block found for {} passengers on flight {}", params.number_of_passengers, flight_id);
    }

    Ok(Json(seat_map))
}
