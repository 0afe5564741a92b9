use serde::Serialize;

use crate::domain::booking::BookingOutcome;
use crate::domain::types::{ReservationId, TableNumber, TimeOfDay};

/// Payload returned for a confirmed reservation.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub table_number: TableNumber,
    pub status: &'static str,
    pub instructions: String,
    pub alternate_slots: Vec<TimeOfDay>,
}

/// Payload returned for the business-failure outcomes.
#[derive(Debug, Serialize)]
pub struct ReservationFailure {
    pub status: &'static str,
    pub error_message: String,
}

impl From<&BookingOutcome> for ReservationFailure {
    fn from(outcome: &BookingOutcome) -> Self {
        Self {
            status: outcome.status_str(),
            error_message: outcome.error_message().unwrap_or_default(),
        }
    }
}
