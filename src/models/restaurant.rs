use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
};
use crate::domain::types::{
    Address, Capacity, CityName, CuisineName, LocalityName, Rating, RestaurantId, RestaurantName,
    TimeOfDay, TypeConstraintError, Vacancy,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub locality: String,
    pub cuisine: String,
    pub rating: f64,
    pub total_capacity: i32,
    pub vacancy: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: String,
    pub closing_time: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Restaurant> for DomainRestaurant {
    type Error = TypeConstraintError;

    fn try_from(row: Restaurant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RestaurantId::new(row.id)?,
            name: RestaurantName::new(row.name)?,
            address: Address::new(row.address)?,
            city: CityName::new(row.city)?,
            locality: LocalityName::new(row.locality)?,
            cuisine: CuisineName::new(row.cuisine)?,
            rating: Rating::new(row.rating)?,
            total_capacity: Capacity::new(row.total_capacity)?,
            vacancy: Vacancy::new(row.vacancy)?,
            phone: row.phone,
            email: row.email,
            opening_time: TimeOfDay::parse(&row.opening_time)?,
            closing_time: TimeOfDay::parse(&row.closing_time)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub locality: String,
    pub cuisine: String,
    pub rating: f64,
    pub total_capacity: i32,
    pub vacancy: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: String,
    pub closing_time: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewRestaurant {
    /// Builds an insertable row with a generated id and vacancy seeded from
    /// the full capacity.
    pub fn from_domain(
        id: &RestaurantId,
        new: &DomainNewRestaurant,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.as_str().to_string(),
            name: new.name.as_str().to_string(),
            address: new.address.as_str().to_string(),
            city: new.city.as_str().to_string(),
            locality: new.locality.as_str().to_string(),
            cuisine: new.cuisine.as_str().to_string(),
            rating: new.rating.get(),
            total_capacity: new.total_capacity.get(),
            vacancy: new.total_capacity.get(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            opening_time: new.opening_time.to_string(),
            closing_time: new.closing_time.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
