//! The booking decision engine.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::domain::booking::BookingOutcome;
use crate::domain::reservation::NewReservation;
use crate::domain::types::{ReservationStatus, RestaurantId, TableNumber, Vacancy};
use crate::forms::reservations::ReserveTableFormPayload;
use crate::repository::{
    RepositoryError, ReservationReader, ReservationWriter, RestaurantReader, RestaurantWriter,
};
use crate::services::availability::alternative_slots;

use super::{ServiceError, ServiceResult};

/// Per-restaurant mutual-exclusion scope for the booking sequence.
///
/// The conflict check, vacancy decrement and ledger append in
/// [`reserve_table`] are a check-then-act sequence; two concurrent requests
/// for the same restaurant must not interleave between the check and the
/// writes. One registry instance is shared across all request handlers.
#[derive(Default)]
pub struct BookingLocks {
    locks: DashMap<RestaurantId, Arc<Mutex<()>>>,
}

impl BookingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn acquire(&self, id: &RestaurantId) -> Arc<Mutex<()>> {
        self.locks.entry(id.clone()).or_default().clone()
    }
}

/// Attempts to reserve a table, returning one of the four terminal
/// [`BookingOutcome`]s.
///
/// The sequence per restaurant: resolve the restaurant, check capacity,
/// check the slot for a confirmed reservation, then decrement vacancy and
/// append the ledger entry. On either business failure the Availability
/// Calculator supplies alternate slots. Expected business failures are
/// outcomes, not errors; only infrastructure faults surface as
/// `ServiceError`.
pub fn reserve_table<R>(
    payload: &ReserveTableFormPayload,
    repo: &R,
    locks: &BookingLocks,
) -> ServiceResult<BookingOutcome>
where
    R: RestaurantReader + RestaurantWriter + ReservationReader + ReservationWriter,
{
    let slot_lock = locks.acquire(&payload.restaurant_id);
    let _guard = match slot_lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let restaurant = match repo.get_restaurant_by_id(&payload.restaurant_id) {
        Ok(Some(restaurant)) => restaurant,
        Ok(None) => {
            return Ok(BookingOutcome::InvalidRestaurant {
                restaurant_id: payload.restaurant_id.clone(),
            });
        }
        Err(e) => {
            log::error!("Failed to get restaurant {}: {e}", payload.restaurant_id);
            return Err(ServiceError::Internal);
        }
    };

    if !restaurant.vacancy.accommodates(payload.guests) {
        return no_availability(payload, restaurant.vacancy, repo);
    }

    match repo.has_confirmed(&payload.restaurant_id, &payload.date, &payload.time) {
        Ok(false) => {}
        Ok(true) => return time_unavailable(payload, repo),
        Err(e) => {
            log::error!("Failed to check reservation conflict: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let table_number = TableNumber::random();
    let instructions =
        NewReservation::arrival_instructions(payload.time, table_number, payload.guests);
    let new_reservation = NewReservation {
        restaurant_id: payload.restaurant_id.clone(),
        date: payload.date,
        time: payload.time,
        guests: payload.guests,
        user_name: payload.user_name.clone(),
        user_phone: payload.user_phone.clone(),
        table_number,
        status: ReservationStatus::Confirmed,
        instructions,
    };

    match repo.decrement_vacancy(&payload.restaurant_id, payload.guests) {
        Ok(true) => {}
        Ok(false) => {
            // The seats were taken between the capacity check and the
            // update; report the current vacancy.
            let available = match repo.get_restaurant_by_id(&payload.restaurant_id) {
                Ok(Some(restaurant)) => restaurant.vacancy,
                _ => restaurant.vacancy,
            };
            return no_availability(payload, available, repo);
        }
        Err(e) => {
            log::error!("Failed to decrement vacancy: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let reservation = match repo.create_reservation(&new_reservation) {
        Ok(reservation) => reservation,
        // Another writer confirmed the slot first; the partial unique index
        // on confirmed slots is the cross-process backstop.
        Err(RepositoryError::UniqueViolation(_)) => return time_unavailable(payload, repo),
        Err(e) => {
            log::error!("Failed to append reservation: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(BookingOutcome::Confirmed {
        reservation_id: reservation.id,
        table_number: reservation.table_number,
        instructions: reservation.instructions,
    })
}

fn no_availability<R>(
    payload: &ReserveTableFormPayload,
    available: Vacancy,
    repo: &R,
) -> ServiceResult<BookingOutcome>
where
    R: RestaurantReader + ReservationReader,
{
    let alternatives = alternative_slots(&payload.restaurant_id, &payload.date, &payload.time, repo)?;
    Ok(BookingOutcome::NoAvailability {
        required: payload.guests,
        available,
        alternatives,
    })
}

fn time_unavailable<R>(payload: &ReserveTableFormPayload, repo: &R) -> ServiceResult<BookingOutcome>
where
    R: RestaurantReader + ReservationReader,
{
    let alternatives = alternative_slots(&payload.restaurant_id, &payload.date, &payload.time, repo)?;
    Ok(BookingOutcome::TimeUnavailable {
        time: payload.time,
        alternatives,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::restaurant::Restaurant;
    use crate::domain::types::{
        Address, BookingDate, Capacity, CityName, CuisineName, GuestCount, LocalityName,
        PhoneNumber, Rating, RestaurantName, TimeOfDay, UserName,
    };
    use crate::repository::test::TestRepository;

    fn sample_restaurant(id: &str, capacity: i32, vacancy: i32) -> Restaurant {
        let now = Utc::now().naive_utc();
        Restaurant {
            id: RestaurantId::new(id).unwrap(),
            name: RestaurantName::new("Punjab Grill").unwrap(),
            address: Address::new("Phoenix Mills, Lower Parel").unwrap(),
            city: CityName::new("Mumbai").unwrap(),
            locality: LocalityName::new("Lower Parel").unwrap(),
            cuisine: CuisineName::new("North Indian").unwrap(),
            rating: Rating::new(4.7).unwrap(),
            total_capacity: Capacity::new(capacity).unwrap(),
            vacancy: Vacancy::new(vacancy).unwrap(),
            phone: None,
            email: None,
            opening_time: TimeOfDay::parse("09:00").unwrap(),
            closing_time: TimeOfDay::parse("12:00").unwrap(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn payload(restaurant_id: &str, time: &str, guests: i32) -> ReserveTableFormPayload {
        ReserveTableFormPayload {
            restaurant_id: RestaurantId::new(restaurant_id).unwrap(),
            date: BookingDate::parse("2099-01-01").unwrap(),
            time: TimeOfDay::parse(time).unwrap(),
            guests: GuestCount::new(guests).unwrap(),
            user_name: UserName::new("Priya Sharma").unwrap(),
            user_phone: PhoneNumber::new("+91 98200 12345").unwrap(),
        }
    }

    #[test]
    fn confirms_and_takes_seats() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", 10, 10)]);
        let locks = BookingLocks::new();

        let outcome = reserve_table(&payload("res_1", "10:00", 1), &repo, &locks).unwrap();

        match outcome {
            BookingOutcome::Confirmed {
                reservation_id,
                table_number,
                instructions,
            } => {
                assert!(reservation_id.as_str().starts_with("rev_"));
                assert!((1..=20).contains(&table_number.get()));
                assert!(instructions.contains("Arrive by 09:50."));
                assert!(instructions.contains("reserved for 1 guests."));
            }
            other => panic!("expected confirmation, got {other:?}"),
        }

        assert_eq!(repo.restaurants()[0].vacancy, 9);
        assert_eq!(repo.reservations().len(), 1);
    }

    #[test]
    fn rejects_double_booking_of_a_slot() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", 10, 10)]);
        let locks = BookingLocks::new();

        let first = reserve_table(&payload("res_1", "10:00", 1), &repo, &locks).unwrap();
        assert!(matches!(first, BookingOutcome::Confirmed { .. }));

        let second = reserve_table(&payload("res_1", "10:00", 1), &repo, &locks).unwrap();
        match second {
            BookingOutcome::TimeUnavailable { time, alternatives } => {
                assert_eq!(time.to_string(), "10:00");
                let slots: Vec<String> =
                    alternatives.iter().map(ToString::to_string).collect();
                assert!(slots.iter().all(|s| s == "09:00" || s == "11:00"));
            }
            other => panic!("expected time_unavailable, got {other:?}"),
        }

        assert_eq!(repo.reservations().len(), 1);
        assert_eq!(repo.restaurants()[0].vacancy, 9);
    }

    #[test]
    fn reports_missing_capacity_with_counts() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", 10, 2)]);
        let locks = BookingLocks::new();

        let outcome = reserve_table(&payload("res_1", "10:00", 5), &repo, &locks).unwrap();

        match outcome {
            BookingOutcome::NoAvailability {
                required,
                available,
                ..
            } => {
                assert_eq!(required.get(), 5);
                assert_eq!(available.get(), 2);
            }
            other => panic!("expected no_availability, got {other:?}"),
        }

        assert_eq!(repo.restaurants()[0].vacancy, 2);
        assert!(repo.reservations().is_empty());
    }

    #[test]
    fn rejects_unknown_restaurants() {
        let repo = TestRepository::default();
        let locks = BookingLocks::new();

        let outcome = reserve_table(&payload("res_missing", "10:00", 2), &repo, &locks).unwrap();

        match outcome {
            BookingOutcome::InvalidRestaurant { restaurant_id } => {
                assert_eq!(restaurant_id, "res_missing");
            }
            other => panic!("expected invalid_restaurant, got {other:?}"),
        }
    }

    #[test]
    fn different_slots_share_the_vacancy_pool() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", 10, 10)]);
        let locks = BookingLocks::new();

        let first = reserve_table(&payload("res_1", "09:00", 6), &repo, &locks).unwrap();
        assert!(matches!(first, BookingOutcome::Confirmed { .. }));

        let second = reserve_table(&payload("res_1", "10:00", 6), &repo, &locks).unwrap();
        match second {
            BookingOutcome::NoAvailability {
                required,
                available,
                ..
            } => {
                assert_eq!(required.get(), 6);
                assert_eq!(available.get(), 4);
            }
            other => panic!("expected no_availability, got {other:?}"),
        }
    }
}
