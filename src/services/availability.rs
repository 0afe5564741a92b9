//! Alternate-slot suggestions for unavailable reservation requests.

use crate::domain::types::{BookingDate, RestaurantId, TimeOfDay};
use crate::repository::{ReservationReader, RestaurantReader};

use super::{ServiceError, ServiceResult};

/// At most this many alternatives are suggested.
pub const MAX_ALTERNATIVES: usize = 3;

/// Slot generation never runs past this hour, regardless of closing time.
pub const LAST_SLOT_HOUR: u8 = 23;

/// Computes up to [`MAX_ALTERNATIVES`] free hourly slots for a restaurant on
/// a date, in ascending order.
///
/// Candidates run from the opening hour (inclusive) to the closing hour
/// capped at [`LAST_SLOT_HOUR`] (exclusive). A candidate is dropped when it
/// equals `excluded_time` or already holds a confirmed reservation. An
/// unknown restaurant or an empty hour range yields an empty list; this is a
/// best-effort helper and neither case is an error.
pub fn alternative_slots<R>(
    restaurant_id: &RestaurantId,
    date: &BookingDate,
    excluded_time: &TimeOfDay,
    repo: &R,
) -> ServiceResult<Vec<TimeOfDay>>
where
    R: RestaurantReader + ReservationReader,
{
    let restaurant = match repo.get_restaurant_by_id(restaurant_id) {
        Ok(Some(restaurant)) => restaurant,
        Ok(None) => return Ok(Vec::new()),
        Err(e) => {
            log::error!("Failed to get restaurant for slot suggestions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let first_hour = restaurant.opening_time.hour();
    let end_hour = restaurant.closing_time.hour().min(LAST_SLOT_HOUR);

    let mut slots = Vec::new();
    for hour in first_hour..end_hour {
        let slot = TimeOfDay::on_the_hour(hour)?;
        if slot == *excluded_time {
            continue;
        }
        match repo.has_confirmed(restaurant_id, date, &slot) {
            Ok(true) => continue,
            Ok(false) => slots.push(slot),
            Err(e) => {
                log::error!("Failed to check slot conflict: {e}");
                return Err(ServiceError::Internal);
            }
        }
        if slots.len() == MAX_ALTERNATIVES {
            break;
        }
    }

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::reservation::NewReservation;
    use crate::domain::restaurant::Restaurant;
    use crate::domain::types::{
        Address, Capacity, CityName, CuisineName, GuestCount, LocalityName, PhoneNumber, Rating,
        ReservationStatus, RestaurantName, TableNumber, UserName, Vacancy,
    };
    use crate::repository::ReservationWriter;
    use crate::repository::test::TestRepository;

    fn sample_restaurant(id: &str, opening: &str, closing: &str) -> Restaurant {
        let now = Utc::now().naive_utc();
        Restaurant {
            id: RestaurantId::new(id).unwrap(),
            name: RestaurantName::new("Trishna").unwrap(),
            address: Address::new("7 Ropewalk Lane, Fort").unwrap(),
            city: CityName::new("Mumbai").unwrap(),
            locality: LocalityName::new("Fort").unwrap(),
            cuisine: CuisineName::new("Coastal Indian").unwrap(),
            rating: Rating::new(4.8).unwrap(),
            total_capacity: Capacity::new(45).unwrap(),
            vacancy: Vacancy::new(45).unwrap(),
            phone: None,
            email: None,
            opening_time: TimeOfDay::parse(opening).unwrap(),
            closing_time: TimeOfDay::parse(closing).unwrap(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn book(repo: &TestRepository, restaurant_id: &str, date: &str, time: &str) {
        let time = TimeOfDay::parse(time).unwrap();
        let table_number = TableNumber::random();
        let guests = GuestCount::new(2).unwrap();
        repo.create_reservation(&NewReservation {
            restaurant_id: RestaurantId::new(restaurant_id).unwrap(),
            date: BookingDate::parse(date).unwrap(),
            time,
            guests,
            user_name: UserName::new("Guest").unwrap(),
            user_phone: PhoneNumber::new("+91 00000 00000").unwrap(),
            table_number,
            status: ReservationStatus::Confirmed,
            instructions: NewReservation::arrival_instructions(time, table_number, guests),
        })
        .unwrap();
    }

    fn slots_as_strings(slots: &[TimeOfDay]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn suggests_free_slots_in_ascending_order() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", "09:00", "12:00")]);
        book(&repo, "res_1", "2099-01-01", "10:00");

        let slots = alternative_slots(
            &RestaurantId::new("res_1").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("10:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert_eq!(slots_as_strings(&slots), vec!["09:00", "11:00"]);
    }

    #[test]
    fn excludes_the_requested_time_even_when_free() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", "09:00", "12:00")]);

        let slots = alternative_slots(
            &RestaurantId::new("res_1").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("10:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert_eq!(slots_as_strings(&slots), vec!["09:00", "11:00"]);
    }

    #[test]
    fn truncates_to_three_slots() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", "09:00", "23:00")]);

        let slots = alternative_slots(
            &RestaurantId::new("res_1").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("19:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert_eq!(slots_as_strings(&slots), vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn conflicts_on_other_dates_do_not_block_slots() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", "09:00", "11:00")]);
        book(&repo, "res_1", "2099-01-02", "09:00");

        let slots = alternative_slots(
            &RestaurantId::new("res_1").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("10:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert_eq!(slots_as_strings(&slots), vec!["09:00"]);
    }

    #[test]
    fn empty_hour_range_yields_no_slots() {
        let repo = TestRepository::new(vec![sample_restaurant("res_1", "22:00", "22:00")]);

        let slots = alternative_slots(
            &RestaurantId::new("res_1").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("22:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert!(slots.is_empty());
    }

    #[test]
    fn unknown_restaurant_yields_no_slots() {
        let repo = TestRepository::default();

        let slots = alternative_slots(
            &RestaurantId::new("res_missing").unwrap(),
            &BookingDate::parse("2099-01-01").unwrap(),
            &TimeOfDay::parse("10:00").unwrap(),
            &repo,
        )
        .unwrap();

        assert!(slots.is_empty());
    }
}
