use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use flightplan_core::PricingError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::flights::load_flight;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub flight_id: u64,
    pub passengers: i64,
    pub selected_seats: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub flight_id: u64,
    pub flight_number: String,
    pub passengers: u32,
    pub confirmed_seats: Vec<String>,
    /// Minor units.
    pub total_price: i64,
    pub currency: String,
    pub booking_time: DateTime<Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights/bookings", post(create_booking))
}

/// POST /api/flights/bookings
///
/// Prices the selection; seats are not held or marked occupied.
async fn create_booking(
    State(state): State<AppState>,
    AppJson(req): AppJson<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    info!("Booking request: {:?}", req);

    let passengers = u32::try_from(req.passengers)
        .ok()
        .filter(|&p| p >= 1)
        .ok_or_else(|| AppError::ValidationError("Number of passengers must be at least 1".to_string()))?;
    if req.selected_seats.is_empty() {
        return Err(AppError::ValidationError("At least one seat must be selected".to_string()));
    }

    let flight = load_flight(&state, req.flight_id).await?;

    let quote = state
        .seat_service
        .booking_price(&flight, passengers, &req.selected_seats)
        .map_err(|e| {
            match &e {
                PricingError::InvalidSeat { seat_nr } => {
                    warn!("Booking failed: Invalid seat number {} provided for flight {}", seat_nr, flight.id)
                }
                PricingError::PriceConfiguration { .. } => {
                    error!("Booking failed: Invalid base price found for flight ID: {}", flight.id)
                }
                PricingError::PriceOverflow { .. } => {
                    error!("Booking failed: Total price overflow for flight ID: {}", flight.id)
                }
            }
            AppError::from(e)
        })?;

    debug!("Base price calculated for {} passengers: {}", passengers, quote.base_total);
    info!("Calculated price of the booking is {} {}", quote.total, quote.currency);

    Ok(Json(BookingResponse {
        booking_id: Uuid::new_v4(),
        flight_id: flight.id,
        flight_number: flight.flight_nr,
        passengers,
        confirmed_seats: req.selected_seats,
        total_price: quote.total,
        currency: quote.currency,
        booking_time: Utc::now(),
    }))
}
