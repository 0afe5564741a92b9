use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BookingDate, GuestCount, PhoneNumber, ReservationId, ReservationStatus, RestaurantId,
    TableNumber, TimeOfDay, UserName,
};

/// A ledger entry for a booked table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub restaurant_id: RestaurantId,
    pub date: BookingDate,
    pub time: TimeOfDay,
    pub guests: GuestCount,
    pub user_name: UserName,
    pub user_phone: PhoneNumber,
    pub table_number: TableNumber,
    pub status: ReservationStatus,
    pub instructions: String,
    pub created_at: NaiveDateTime,
}

/// Information required to append a new [`Reservation`] to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReservation {
    pub restaurant_id: RestaurantId,
    pub date: BookingDate,
    pub time: TimeOfDay,
    pub guests: GuestCount,
    pub user_name: UserName,
    pub user_phone: PhoneNumber,
    pub table_number: TableNumber,
    pub status: ReservationStatus,
    pub instructions: String,
}

impl NewReservation {
    /// Arrival guidance shown to the guest on confirmation.
    pub fn arrival_instructions(
        time: TimeOfDay,
        table_number: TableNumber,
        guests: GuestCount,
    ) -> String {
        format!(
            "Arrive by {}. Table {} reserved for {} guests.",
            time.minus_minutes(10),
            table_number,
            guests
        )
    }
}
