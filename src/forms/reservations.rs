use chrono::Local;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{
    BookingDate, GuestCount, PhoneNumber, RestaurantId, TimeOfDay, TypeConstraintError, UserName,
};

#[derive(Debug, Deserialize, Validate)]
pub struct ReserveTableForm {
    #[validate(length(min = 1))]
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    #[validate(range(min = 1, max = 20))]
    pub guests: i32,
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,
    #[validate(length(min = 1))]
    pub user_phone: String,
}

/// Validated booking request handed to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveTableFormPayload {
    pub restaurant_id: RestaurantId,
    pub date: BookingDate,
    pub time: TimeOfDay,
    pub guests: GuestCount,
    pub user_name: UserName,
    pub user_phone: PhoneNumber,
}

#[derive(Debug, Error)]
pub enum ReserveTableFormError {
    #[error("Reservation form validation failed: {0}")]
    Validation(String),
    #[error("Reservation form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ReserveTableFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ReserveTableFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ReserveTableForm> for ReserveTableFormPayload {
    type Error = ReserveTableFormError;

    fn try_from(value: ReserveTableForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let today = Local::now().date_naive();
        Ok(Self {
            restaurant_id: RestaurantId::new(value.restaurant_id)?,
            date: BookingDate::parse(&value.date)?.require_not_past(today)?,
            time: TimeOfDay::parse(&value.time)?,
            guests: GuestCount::new(value.guests)?,
            user_name: UserName::new(value.user_name)?,
            user_phone: PhoneNumber::new(value.user_phone)?,
        })
    }
}
