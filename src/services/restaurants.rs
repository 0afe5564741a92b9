//! Directory services: creation, listing, search and sample data.

use crate::domain::restaurant::{NewRestaurant, Restaurant};
use crate::domain::types::{
    Address, Capacity, CityName, CuisineName, LocalityName, Rating, RestaurantName, TimeOfDay,
};
use crate::forms::restaurants::SearchRestaurantsFormPayload;
use crate::repository::{
    ReservationReader, RestaurantReader, RestaurantSearchQuery, RestaurantWriter,
};
use crate::services::availability::alternative_slots;

use super::{ServiceError, ServiceResult};

/// A search match together with its free hourly slots around the requested
/// time.
#[derive(Debug, Clone)]
pub struct RestaurantSearchHit {
    pub restaurant: Restaurant,
    pub available_slots: Vec<TimeOfDay>,
}

/// Persists a new restaurant and returns the stored record.
pub fn create_restaurant<R>(new: &NewRestaurant, repo: &R) -> ServiceResult<Restaurant>
where
    R: RestaurantWriter,
{
    repo.create_restaurant(new).map_err(|e| {
        log::error!("Failed to create restaurant: {e}");
        ServiceError::Internal
    })
}

/// Lists all active restaurants.
pub fn list_restaurants<R>(repo: &R) -> ServiceResult<Vec<Restaurant>>
where
    R: RestaurantReader,
{
    repo.list_restaurants().map_err(|e| {
        log::error!("Failed to list restaurants: {e}");
        ServiceError::Internal
    })
}

/// Searches the directory and annotates every match with free slots on the
/// requested date, excluding the requested time.
///
/// An empty result is valid; deciding how to present it is left to the
/// caller.
pub fn search_restaurants<R>(
    payload: &SearchRestaurantsFormPayload,
    repo: &R,
) -> ServiceResult<Vec<RestaurantSearchHit>>
where
    R: RestaurantReader + ReservationReader,
{
    let query = RestaurantSearchQuery::new(
        payload.city.as_str(),
        payload.locality.as_str(),
        payload.cuisine.as_str(),
    );

    let restaurants = repo.search_restaurants(&query).map_err(|e| {
        log::error!("Failed to search restaurants: {e}");
        ServiceError::Internal
    })?;

    restaurants
        .into_iter()
        .map(|restaurant| {
            let available_slots =
                alternative_slots(&restaurant.id, &payload.date, &payload.time, repo)?;
            Ok(RestaurantSearchHit {
                restaurant,
                available_slots,
            })
        })
        .collect()
}

/// Seed records for demos and manual testing.
const SAMPLE_RESTAURANTS: &[(&str, &str, &str, &str, &str, f64, i32, &str, &str)] = &[
    (
        "Swaad South Indian Kitchen",
        "Colaba Causeway, Fort, Mumbai",
        "Mumbai",
        "Colaba",
        "South Indian",
        4.5,
        60,
        "+91 22 2202 0000",
        "info@swaadkitchen.com",
    ),
    (
        "Punjab Grill",
        "Phoenix Mills, Lower Parel, Mumbai",
        "Mumbai",
        "Lower Parel",
        "North Indian",
        4.7,
        80,
        "+91 22 6671 7666",
        "reservations@punjabgrill.com",
    ),
    (
        "Trishna",
        "7 Ropewalk Lane, Fort, Mumbai",
        "Mumbai",
        "Fort",
        "Coastal Indian",
        4.8,
        45,
        "+91 22 2270 3213",
        "bookings@trishna.com",
    ),
    (
        "Dakshin",
        "Crowne Plaza, Adyar, Chennai",
        "Chennai",
        "Adyar",
        "South Indian",
        4.7,
        100,
        "+91 44 2499 4101",
        "contact@dakshinchennai.com",
    ),
    (
        "Karim's",
        "Jama Masjid, Old Delhi",
        "Delhi",
        "Old Delhi",
        "Mughlai",
        4.8,
        60,
        "+91 11 2326 4981",
        "reservations@karimsdelhi.com",
    ),
    (
        "Truffles",
        "Koramangala, Bangalore",
        "Bangalore",
        "Koramangala",
        "Continental",
        4.6,
        75,
        "+91 80 4146 6677",
        "info@trufflesbangalore.com",
    ),
];

/// Populates the directory with the sample restaurants and returns the
/// stored records.
pub fn populate_sample_restaurants<R>(repo: &R) -> ServiceResult<Vec<Restaurant>>
where
    R: RestaurantWriter,
{
    let mut created = Vec::with_capacity(SAMPLE_RESTAURANTS.len());
    for (name, address, city, locality, cuisine, rating, capacity, phone, email) in
        SAMPLE_RESTAURANTS
    {
        let new_restaurant = NewRestaurant {
            name: RestaurantName::new(*name)?,
            address: Address::new(*address)?,
            city: CityName::new(*city)?,
            locality: LocalityName::new(*locality)?,
            cuisine: CuisineName::new(*cuisine)?,
            rating: Rating::new(*rating)?,
            total_capacity: Capacity::new(*capacity)?,
            phone: Some((*phone).to_string()),
            email: Some((*email).to_string()),
            opening_time: TimeOfDay::parse("09:00")?,
            closing_time: TimeOfDay::parse("23:00")?,
        };
        created.push(create_restaurant(&new_restaurant, repo)?);
    }
    Ok(created)
}
