use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation,
};
use crate::domain::types::{
    BookingDate, GuestCount, PhoneNumber, ReservationId, ReservationStatus, RestaurantId,
    TableNumber, TimeOfDay, TypeConstraintError, UserName,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub user_name: String,
    pub user_phone: String,
    pub table_number: i32,
    pub status: String,
    pub instructions: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Reservation> for DomainReservation {
    type Error = TypeConstraintError;

    fn try_from(row: Reservation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReservationId::new(row.id)?,
            restaurant_id: RestaurantId::new(row.restaurant_id)?,
            date: BookingDate::parse(&row.date)?,
            time: TimeOfDay::parse(&row.time)?,
            guests: GuestCount::new(row.guests)?,
            user_name: UserName::new(row.user_name)?,
            user_phone: PhoneNumber::new(row.user_phone)?,
            table_number: TableNumber::new(row.table_number)?,
            status: ReservationStatus::try_from(row.status)?,
            instructions: row.instructions,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation {
    pub id: String,
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub user_name: String,
    pub user_phone: String,
    pub table_number: i32,
    pub status: String,
    pub instructions: String,
    pub created_at: NaiveDateTime,
}

impl NewReservation {
    /// Builds an insertable row with a generated id.
    pub fn from_domain(
        id: &ReservationId,
        new: &DomainNewReservation,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.as_str().to_string(),
            restaurant_id: new.restaurant_id.as_str().to_string(),
            date: new.date.to_string(),
            time: new.time.to_string(),
            guests: new.guests.get(),
            user_name: new.user_name.as_str().to_string(),
            user_phone: new.user_phone.as_str().to_string(),
            table_number: new.table_number.get(),
            status: new.status.as_str().to_string(),
            instructions: new.instructions.clone(),
            created_at: now,
        }
    }
}
