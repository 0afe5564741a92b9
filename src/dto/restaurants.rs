use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::restaurant::Restaurant;
use crate::domain::types::{
    Address, Capacity, CityName, CuisineName, LocalityName, Rating, RestaurantId, RestaurantName,
    TimeOfDay, Vacancy,
};
use crate::services::restaurants::RestaurantSearchHit;

/// Full restaurant record as returned by the directory endpoints.
#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub id: RestaurantId,
    pub name: RestaurantName,
    pub address: Address,
    pub city: CityName,
    pub locality: LocalityName,
    pub cuisine: CuisineName,
    pub rating: Rating,
    pub total_capacity: Capacity,
    pub vacancy: Vacancy,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            city: restaurant.city,
            locality: restaurant.locality,
            cuisine: restaurant.cuisine,
            rating: restaurant.rating,
            total_capacity: restaurant.total_capacity,
            vacancy: restaurant.vacancy,
            phone: restaurant.phone,
            email: restaurant.email,
            opening_time: restaurant.opening_time,
            closing_time: restaurant.closing_time,
            is_active: restaurant.is_active,
            created_at: restaurant.created_at,
        }
    }
}

/// Search hit with free slots around the requested time.
#[derive(Debug, Serialize)]
pub struct RestaurantSearchResponse {
    pub id: RestaurantId,
    pub name: RestaurantName,
    pub address: Address,
    pub rating: Rating,
    pub cuisine: CuisineName,
    pub available_slots: Vec<TimeOfDay>,
}

impl From<RestaurantSearchHit> for RestaurantSearchResponse {
    fn from(hit: RestaurantSearchHit) -> Self {
        Self {
            id: hit.restaurant.id,
            name: hit.restaurant.name,
            address: hit.restaurant.address,
            rating: hit.restaurant.rating,
            cuisine: hit.restaurant.cuisine,
            available_slots: hit.available_slots,
        }
    }
}

/// Body of the 404 returned when a search matches nothing.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub restaurants: Vec<RestaurantSearchResponse>,
}
