use std::sync::Mutex;

use chrono::Utc;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::restaurant::{NewRestaurant, Restaurant};
use crate::domain::types::{
    BookingDate, GuestCount, ReservationId, RestaurantId, TimeOfDay, Vacancy,
};
use crate::repository::{
    RepositoryResult, ReservationReader, ReservationWriter, RestaurantReader,
    RestaurantSearchQuery, RestaurantWriter,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    restaurants: Mutex<Vec<Restaurant>>,
    reservations: Mutex<Vec<Reservation>>,
}

impl TestRepository {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Mutex::new(restaurants),
            reservations: Mutex::new(Vec::new()),
        }
    }

    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.lock().expect("lock poisoned").clone()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.lock().expect("lock poisoned").clone()
    }

    fn matches(value: &str, pattern: &str) -> bool {
        value
            .to_lowercase()
            .contains(&pattern.trim().to_lowercase())
    }
}

impl RestaurantReader for TestRepository {
    fn get_restaurant_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>> {
        Ok(self
            .restaurants
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        Ok(self
            .restaurants
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect())
    }

    fn search_restaurants(
        &self,
        query: &RestaurantSearchQuery,
    ) -> RepositoryResult<Vec<Restaurant>> {
        let mut items: Vec<Restaurant> = self
            .restaurants
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| Self::matches(r.city.as_str(), &query.city))
            .filter(|r| Self::matches(r.locality.as_str(), &query.locality))
            .filter(|r| Self::matches(r.cuisine.as_str(), &query.cuisine))
            .filter(|r| !query.active_only || r.is_active)
            .filter(|r| r.vacancy.get() > query.min_vacancy)
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            b.rating
                .get()
                .partial_cmp(&a.rating.get())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items.truncate(query.limit as usize);
        Ok(items)
    }
}

impl RestaurantWriter for TestRepository {
    fn create_restaurant(&self, new: &NewRestaurant) -> RepositoryResult<Restaurant> {
        let now = Utc::now().naive_utc();
        let restaurant = Restaurant {
            id: RestaurantId::generate(),
            name: new.name.clone(),
            address: new.address.clone(),
            city: new.city.clone(),
            locality: new.locality.clone(),
            cuisine: new.cuisine.clone(),
            rating: new.rating,
            total_capacity: new.total_capacity,
            vacancy: new.total_capacity.into(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            opening_time: new.opening_time,
            closing_time: new.closing_time,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.restaurants
            .lock()
            .expect("lock poisoned")
            .push(restaurant.clone());
        Ok(restaurant)
    }

    fn decrement_vacancy(&self, id: &RestaurantId, amount: GuestCount) -> RepositoryResult<bool> {
        let mut restaurants = self.restaurants.lock().expect("lock poisoned");
        let Some(restaurant) = restaurants.iter_mut().find(|r| &r.id == id) else {
            return Ok(false);
        };
        let remaining = restaurant.vacancy.get() - amount.get();
        match Vacancy::new(remaining) {
            Ok(vacancy) => {
                restaurant.vacancy = vacancy;
                restaurant.updated_at = Utc::now().naive_utc();
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}

impl ReservationReader for TestRepository {
    fn has_confirmed(
        &self,
        restaurant_id: &RestaurantId,
        date: &BookingDate,
        time: &TimeOfDay,
    ) -> RepositoryResult<bool> {
        Ok(self
            .reservations
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|r| {
                &r.restaurant_id == restaurant_id
                    && r.date == *date
                    && r.time == *time
                    && r.status == crate::domain::types::ReservationStatus::Confirmed
            }))
    }

    fn list_reservations_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RepositoryResult<Vec<Reservation>> {
        let mut items: Vec<Reservation> = self
            .reservations
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| &r.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        items.sort_by_key(|r| (r.date, r.time));
        Ok(items)
    }
}

impl ReservationWriter for TestRepository {
    fn create_reservation(&self, new: &NewReservation) -> RepositoryResult<Reservation> {
        let reservation = Reservation {
            id: ReservationId::generate(),
            restaurant_id: new.restaurant_id.clone(),
            date: new.date,
            time: new.time,
            guests: new.guests,
            user_name: new.user_name.clone(),
            user_phone: new.user_phone.clone(),
            table_number: new.table_number,
            status: new.status,
            instructions: new.instructions.clone(),
            created_at: Utc::now().naive_utc(),
        };
        self.reservations
            .lock()
            .expect("lock poisoned")
            .push(reservation.clone());
        Ok(reservation)
    }
}
