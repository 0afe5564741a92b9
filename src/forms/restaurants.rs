use chrono::Local;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::restaurant::NewRestaurant;
use crate::domain::types::{
    Address, BookingDate, Capacity, CityName, CuisineName, LocalityName, Rating, RestaurantName,
    TimeOfDay, TypeConstraintError,
};

const DEFAULT_RATING: f64 = 0.0;
const DEFAULT_CAPACITY: i32 = 50;
const DEFAULT_OPENING_TIME: &str = "09:00";
const DEFAULT_CLOSING_TIME: &str = "23:00";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRestaurantForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub locality: String,
    #[validate(length(min = 1, max = 100))]
    pub cuisine: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 1, max = 500))]
    pub total_capacity: Option<i32>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Debug, Error)]
pub enum CreateRestaurantFormError {
    #[error("Create restaurant form validation failed: {0}")]
    Validation(String),
    #[error("Create restaurant form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateRestaurantFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateRestaurantFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateRestaurantForm> for NewRestaurant {
    type Error = CreateRestaurantFormError;

    fn try_from(value: CreateRestaurantForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: RestaurantName::new(value.name)?,
            address: Address::new(value.address)?,
            city: CityName::new(value.city)?,
            locality: LocalityName::new(value.locality)?,
            cuisine: CuisineName::new(value.cuisine)?,
            rating: Rating::new(value.rating.unwrap_or(DEFAULT_RATING))?,
            total_capacity: Capacity::new(value.total_capacity.unwrap_or(DEFAULT_CAPACITY))?,
            phone: value.phone,
            email: value.email,
            opening_time: TimeOfDay::parse(
                value.opening_time.as_deref().unwrap_or(DEFAULT_OPENING_TIME),
            )?,
            closing_time: TimeOfDay::parse(
                value.closing_time.as_deref().unwrap_or(DEFAULT_CLOSING_TIME),
            )?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchRestaurantsForm {
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub locality: String,
    #[validate(length(min = 1))]
    pub cuisine: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRestaurantsFormPayload {
    pub city: CityName,
    pub locality: LocalityName,
    pub cuisine: CuisineName,
    pub date: BookingDate,
    pub time: TimeOfDay,
}

#[derive(Debug, Error)]
pub enum SearchRestaurantsFormError {
    #[error("Search form validation failed: {0}")]
    Validation(String),
    #[error("Search form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SearchRestaurantsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SearchRestaurantsFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SearchRestaurantsForm> for SearchRestaurantsFormPayload {
    type Error = SearchRestaurantsFormError;

    fn try_from(value: SearchRestaurantsForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let today = Local::now().date_naive();
        Ok(Self {
            city: CityName::new(value.city)?,
            locality: LocalityName::new(value.locality)?,
            cuisine: CuisineName::new(value.cuisine)?,
            date: BookingDate::parse(&value.date)?.require_not_past(today)?,
            time: TimeOfDay::parse(&value.time)?,
        })
    }
}
