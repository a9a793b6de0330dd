use serde::{Deserialize, Serialize};

use crate::flight::Flight;

/// Flat surcharge per selected first-class seat, in minor units (50.00).
pub const DEFAULT_FIRST_CLASS_SURCHARGE: i64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid seat number selected: {seat_nr}")]
    InvalidSeat { seat_nr: String },

    #[error("Invalid base price configured for flight {flight_id}")]
    PriceConfiguration { flight_id: u64 },

    #[error("Booking total for flight {flight_id} exceeds the representable amount")]
    PriceOverflow { flight_id: u64 },
}

/// Breakdown of a priced seat selection. All amounts are minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub base_total: i64,
    pub first_class_seats: u32,
    pub surcharge_total: i64,
    pub total: i64,
    pub currency: String,
}

/// Prices a booking as `base × passengers + surcharge × first-class seats`.
///
/// `is_first_class` resolves a seat identifier against the flight's layout and
/// answers `None` for identifiers that do not exist. The whole computation
/// fails on the first unknown seat; the seat count is not reconciled with the
/// passenger count.
pub fn compute_booking_price<F>(
    flight: &Flight,
    passenger_count: u32,
    selected_seats: &[String],
    first_class_surcharge: i64,
    is_first_class: F,
) -> Result<BookingQuote, PricingError>
where
    F: Fn(&str) -> Option<bool>,
{
    let base_price = match flight.price_amount {
        Some(amount) if amount > 0 => amount,
        _ => return Err(PricingError::PriceConfiguration { flight_id: flight.id }),
    };

    let mut first_class_seats = 0u32;
    for seat_nr in selected_seats {
        match is_first_class(seat_nr) {
            Some(true) => first_class_seats += 1,
            Some(false) => {}
            None => return Err(PricingError::InvalidSeat { seat_nr: seat_nr.clone() }),
        }
    }

    let overflow = || PricingError::PriceOverflow { flight_id: flight.id };
    let base_total = base_price.checked_mul(i64::from(passenger_count)).ok_or_else(overflow)?;
    let surcharge_total = first_class_surcharge
        .checked_mul(i64::from(first_class_seats))
        .ok_or_else(overflow)?;
    let total = base_total.checked_add(surcharge_total).ok_or_else(overflow)?;

    Ok(BookingQuote {
        base_total,
        first_class_seats,
        surcharge_total,
        total,
        currency: flight.price_currency.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn flight(price_amount: Option<i64>) -> Flight {
        let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        Flight {
            id: 3,
            flight_nr: "FL102".to_string(),
            origin: "TLL".to_string(),
            destination: "HEL".to_string(),
            departure_time: day.and_hms_opt(12, 30, 0).unwrap(),
            arrival_time: day.and_hms_opt(13, 46, 0).unwrap(),
            price_amount,
            price_currency: "EUR".to_string(),
            aircraft_type: "ATR 72".to_string(),
            occupied_seat_nrs: BTreeSet::new(),
        }
    }

    fn lookup(seat_nr: &str) -> Option<bool> {
        match seat_nr {
            "1A" | "2F" => Some(true),
            "10C" | "14D" => Some(false),
            _ => None,
        }
    }

    fn seats(nrs: &[&str]) -> Vec<String> {
        nrs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_economy_only() {
        let quote = compute_booking_price(&flight(Some(10000)), 2, &seats(&["10C", "14D"]), 5000, lookup).unwrap();

        assert_eq!(quote.total, 20000);
        assert_eq!(quote.first_class_seats, 0);
        assert_eq!(quote.currency, "EUR");
    }

    #[test]
    fn test_first_class_surcharge() {
        let quote = compute_booking_price(&flight(Some(10000)), 2, &seats(&["1A", "14D"]), 5000, lookup).unwrap();

        assert_eq!(quote.base_total, 20000);
        assert_eq!(quote.surcharge_total, 5000);
        assert_eq!(quote.total, 25000);
    }

    #[test]
    fn test_seat_count_not_tied_to_passengers() {
        let quote = compute_booking_price(&flight(Some(10000)), 1, &seats(&["1A", "2F", "10C"]), 5000, lookup).unwrap();

        assert_eq!(quote.total, 10000 + 2 * 5000);
    }

    #[test]
    fn test_invalid_seat_names_the_seat() {
        let err = compute_booking_price(&flight(Some(10000)), 2, &seats(&["1A", "30Z", "40Q"]), 5000, lookup)
            .unwrap_err();

        assert_eq!(err, PricingError::InvalidSeat { seat_nr: "30Z".to_string() });
        assert_eq!(err.to_string(), "Invalid seat number selected: 30Z");
    }

    #[test]
    fn test_bad_base_price_is_configuration_error() {
        for price in [None, Some(0), Some(-100)] {
            let err = compute_booking_price(&flight(price), 1, &seats(&["30Z"]), 5000, lookup).unwrap_err();
            assert_eq!(err, PricingError::PriceConfiguration { flight_id: 3 });
        }
    }

    #[test]
    fn test_huge_fare_overflows_instead_of_wrapping() {
        let err = compute_booking_price(&flight(Some(i64::MAX / 2)), 3, &seats(&["10C"]), 5000, lookup)
            .unwrap_err();
        assert_eq!(err, PricingError::PriceOverflow { flight_id: 3 });
    }

    #[test]
    fn test_huge_surcharge_overflows_instead_of_wrapping() {
        let err = compute_booking_price(&flight(Some(10000)), 1, &seats(&["1A", "2F"]), i64::MAX, lookup)
            .unwrap_err();
        assert_eq!(err, PricingError::PriceOverflow { flight_id: 3 });

        let err = compute_booking_price(&flight(Some(i64::MAX - 1)), 1, &seats(&["1A"]), 5000, lookup)
            .unwrap_err();
        assert_eq!(err, PricingError::PriceOverflow { flight_id: 3 });
    }
}
