//! Terminal outcomes of a booking attempt.

use serde::Serialize;

use crate::domain::types::{
    GuestCount, ReservationId, RestaurantId, TableNumber, TimeOfDay, Vacancy,
};

/// Result of running the booking decision algorithm. Every variant is
/// terminal; expected business failures are values here, not errors.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// The reservation was written to the ledger and seats were taken from
    /// the restaurant's vacancy.
    Confirmed {
        reservation_id: ReservationId,
        table_number: TableNumber,
        instructions: String,
    },
    /// The restaurant id did not resolve.
    InvalidRestaurant { restaurant_id: RestaurantId },
    /// The party does not fit in the remaining seats.
    NoAvailability {
        required: GuestCount,
        available: Vacancy,
        alternatives: Vec<TimeOfDay>,
    },
    /// The exact slot already holds a confirmed reservation.
    TimeUnavailable {
        time: TimeOfDay,
        alternatives: Vec<TimeOfDay>,
    },
}

fn join_slots(slots: &[TimeOfDay]) -> String {
    if slots.is_empty() {
        return "No alternatives".to_string();
    }
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl BookingOutcome {
    /// Stable status tag used in API payloads.
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Confirmed { .. } => "confirmed",
            Self::InvalidRestaurant { .. } => "invalid_restaurant",
            Self::NoAvailability { .. } => "no_availability",
            Self::TimeUnavailable { .. } => "time_unavailable",
        }
    }

    /// Human-readable explanation for the failure variants.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Confirmed { .. } => None,
            Self::InvalidRestaurant { restaurant_id } => {
                Some(format!("Restaurant with ID {restaurant_id} not found."))
            }
            Self::NoAvailability {
                required,
                available,
                alternatives,
            } => Some(format!(
                "Not enough seats available. Required: {required}, Available: {available}. \
                 Try these times: {}",
                join_slots(alternatives)
            )),
            Self::TimeUnavailable { time, alternatives } => Some(format!(
                "Time slot {time} is already booked. Available times: {}",
                join_slots(alternatives)
            )),
        }
    }
}
