use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Address, Capacity, CityName, CuisineName, LocalityName, Rating, RestaurantId, RestaurantName,
    TimeOfDay, Vacancy,
};

/// A restaurant listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: RestaurantName,
    pub address: Address,
    pub city: CityName,
    pub locality: LocalityName,
    pub cuisine: CuisineName,
    pub rating: Rating,
    pub total_capacity: Capacity,
    /// Remaining bookable seats. Only ever decremented, by confirmed
    /// reservations.
    pub vacancy: Vacancy,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Restaurant`]. Vacancy starts at
/// the full capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRestaurant {
    pub name: RestaurantName,
    pub address: Address,
    pub city: CityName,
    pub locality: LocalityName,
    pub cuisine: CuisineName,
    pub rating: Rating,
    pub total_capacity: Capacity,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
}
