//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers, text values and numeric constraints are enforced at the
//! boundary.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A numeric value fell outside its allowed range.
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
    /// A wall-clock time string did not match `HH:MM`.
    #[error("invalid time: {0}")]
    InvalidTime(String),
    /// A calendar date string did not match `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// A booking date lies strictly before today.
    #[error("date is in the past: {0}")]
    PastDate(String),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate newtypes for trimmed, non-empty strings.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Macro to generate prefixed string identifiers (`res_1a2b3c4d` style).
macro_rules! entity_id_newtype {
    ($name:ident, $prefix:expr, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier, rejecting empty values.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Generates a fresh identifier with the entity prefix and a
            /// short random hex suffix.
            pub fn generate() -> Self {
                let hex = Uuid::new_v4().simple().to_string();
                Self(format!("{}_{}", $prefix, &hex[..8]))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Macro to generate `i32` newtypes constrained to an inclusive range.
macro_rules! ranged_i32_newtype {
    ($name:ident, $min:expr, $max:expr, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value within the allowed range.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if ($min..=$max).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::OutOfRange($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

entity_id_newtype!(
    RestaurantId,
    "res",
    "Unique identifier for a restaurant.",
    "restaurant id"
);
entity_id_newtype!(
    ReservationId,
    "rev",
    "Unique identifier for a reservation.",
    "reservation id"
);

non_empty_string_newtype!(
    RestaurantName,
    "Restaurant display name enforcing non-empty values.",
    "restaurant name"
);
non_empty_string_newtype!(
    Address,
    "Street address enforcing non-empty values.",
    "address"
);
non_empty_string_newtype!(CityName, "City name enforcing non-empty values.", "city");
non_empty_string_newtype!(
    LocalityName,
    "Locality/neighbourhood name enforcing non-empty values.",
    "locality"
);
non_empty_string_newtype!(
    CuisineName,
    "Free-text cuisine classification enforcing non-empty values.",
    "cuisine"
);
non_empty_string_newtype!(
    UserName,
    "Guest name on a reservation enforcing non-empty values.",
    "user name"
);
non_empty_string_newtype!(
    PhoneNumber,
    "Contact phone number enforcing non-empty values.",
    "phone number"
);

ranged_i32_newtype!(
    Capacity,
    1,
    500,
    "Total seat capacity of a restaurant.",
    "total capacity"
);
ranged_i32_newtype!(
    GuestCount,
    1,
    20,
    "Number of guests on a reservation.",
    "guests"
);
ranged_i32_newtype!(
    TableNumber,
    1,
    TABLE_POOL_SIZE,
    "Table label drawn from the fixed pool.",
    "table number"
);

/// Size of the fixed table label pool.
pub const TABLE_POOL_SIZE: i32 = 20;

impl TableNumber {
    /// Draws a pseudo-random table from the pool. Collisions between
    /// concurrent reservations are tolerated; tables are labels, not an
    /// allocated resource.
    pub fn random() -> Self {
        use rand::Rng;

        Self(rand::thread_rng().gen_range(1..=TABLE_POOL_SIZE))
    }
}

/// Remaining bookable seats at a restaurant. Never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Vacancy(i32);

impl Vacancy {
    /// Constructs a non-negative vacancy count.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::OutOfRange("vacancy"))
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether the given party fits in the remaining seats.
    pub fn accommodates(self, guests: GuestCount) -> bool {
        self.0 >= guests.get()
    }
}

impl Display for Vacancy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Capacity> for Vacancy {
    fn from(value: Capacity) -> Self {
        Self(value.get())
    }
}

impl From<Vacancy> for i32 {
    fn from(value: Vacancy) -> Self {
        value.0
    }
}

impl PartialEq<i32> for Vacancy {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

/// Star rating in the inclusive range [0.0, 5.0].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Constructs a validated rating.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (0.0..=5.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::OutOfRange("rating"))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(0.0)
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Rating {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

/// A wall-clock time of day in `HH:MM` form. All times are local; the system
/// carries no timezone information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Parses an `HH:MM` (24-hour) string. A single-digit hour is accepted.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let invalid = || TypeConstraintError::InvalidTime(value.to_string());
        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }

    /// Constructs the `HH:00` slot for the given hour.
    pub fn on_the_hour(hour: u8) -> Result<Self, TypeConstraintError> {
        if hour > 23 {
            return Err(TypeConstraintError::InvalidTime(format!("{hour}:00")));
        }
        Ok(Self { hour, minute: 0 })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Subtracts minutes, wrapping within the same day (`00:05` minus ten
    /// minutes yields `23:55`).
    pub fn minus_minutes(self, minutes: u16) -> Self {
        let total = self.hour as i32 * 60 + self.minute as i32 - minutes as i32;
        let total = total.rem_euclid(24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// A reservation calendar date in `YYYY-MM-DD` form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parses a `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidDate(value.to_string()))
    }

    /// Rejects dates strictly before `today`.
    pub fn require_not_past(self, today: NaiveDate) -> Result<Self, TypeConstraintError> {
        if self.0 < today {
            Err(TypeConstraintError::PastDate(self.to_string()))
        } else {
            Ok(self)
        }
    }

    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl Display for BookingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for BookingDate {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Lifecycle state of a reservation. Only `Confirmed` is ever produced by
/// the booking flow; the other states exist for ledger records managed
/// outside this service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ReservationStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "reservation status: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for ReservationStatus {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<ReservationStatus> for String {
    fn from(value: ReservationStatus) -> Self {
        value.as_str().to_string()
    }
}
