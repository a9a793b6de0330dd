pub mod flight;
pub mod layout;
pub mod pricing;
pub mod recommend;
pub mod repository;
pub mod search;
pub mod seat_map;

pub use flight::Flight;
pub use layout::{LayoutConfig, Seat, SeatAttributes};
pub use pricing::{BookingQuote, PricingError};
pub use recommend::SeatPreferences;
pub use seat_map::{SeatMapResponse, SeatService};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
