use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::{BookingDate, ReservationId, ReservationStatus, RestaurantId, TimeOfDay};
use crate::models::reservation::{NewReservation as NewDbReservation, Reservation as DbReservation};
use crate::repository::{DieselRepository, RepositoryResult, ReservationReader, ReservationWriter};

impl ReservationReader for DieselRepository {
    fn has_confirmed(
        &self,
        restaurant_id: &RestaurantId,
        date: &BookingDate,
        time: &TimeOfDay,
    ) -> RepositoryResult<bool> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let found = diesel::select(exists(
            reservations::table
                .filter(reservations::restaurant_id.eq(restaurant_id.as_str()))
                .filter(reservations::date.eq(date.to_string()))
                .filter(reservations::time.eq(time.to_string()))
                .filter(reservations::status.eq(ReservationStatus::Confirmed.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_reservations_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RepositoryResult<Vec<Reservation>> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let rows = reservations::table
            .filter(reservations::restaurant_id.eq(restaurant_id.as_str()))
            .order((reservations::date.asc(), reservations::time.asc()))
            .load::<DbReservation>(&mut conn)?;

        rows.into_iter()
            .map(|row| Reservation::try_from(row).map_err(Into::into))
            .collect()
    }
}

impl ReservationWriter for DieselRepository {
    fn create_reservation(&self, new: &NewReservation) -> RepositoryResult<Reservation> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let id = ReservationId::generate();
        let now = Utc::now().naive_utc();
        let row = diesel::insert_into(reservations::table)
            .values(NewDbReservation::from_domain(&id, new, now))
            .get_result::<DbReservation>(&mut conn)?;

        Reservation::try_from(row).map_err(Into::into)
    }
}
