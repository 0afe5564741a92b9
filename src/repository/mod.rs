use crate::db::{DbConnection, DbPool};
use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::restaurant::{NewRestaurant, Restaurant};
use crate::domain::types::{BookingDate, GuestCount, RestaurantId, TimeOfDay};

pub mod errors;
pub mod reservation;
pub mod restaurant;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Search results are truncated to this many restaurants.
pub const MAX_SEARCH_RESULTS: i64 = 5;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when searching the restaurant directory.
///
/// City, locality and cuisine are matched as case-insensitive substrings.
#[derive(Debug, Clone)]
pub struct RestaurantSearchQuery {
    pub city: String,
    pub locality: String,
    pub cuisine: String,
    /// Restrict results to active restaurants.
    pub active_only: bool,
    /// Only include restaurants with `vacancy > min_vacancy`.
    pub min_vacancy: i32,
    /// Maximum number of results, ordered by rating descending.
    pub limit: i64,
}

impl RestaurantSearchQuery {
    pub fn new(
        city: impl Into<String>,
        locality: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            locality: locality.into(),
            cuisine: cuisine.into(),
            active_only: true,
            min_vacancy: 0,
            limit: MAX_SEARCH_RESULTS,
        }
    }

    pub fn min_vacancy(mut self, min_vacancy: i32) -> Self {
        self.min_vacancy = min_vacancy;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

/// Read-only operations for the restaurant directory.
pub trait RestaurantReader {
    /// Retrieve a restaurant by its identifier.
    fn get_restaurant_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>>;
    /// List all active restaurants.
    fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>>;
    /// Search the directory, ordered by rating descending and truncated to
    /// the query limit.
    fn search_restaurants(&self, query: &RestaurantSearchQuery)
    -> RepositoryResult<Vec<Restaurant>>;
}

/// Write operations for the restaurant directory.
pub trait RestaurantWriter {
    /// Persist a new restaurant with a fresh identifier and vacancy seeded
    /// from its capacity; returns the stored record.
    fn create_restaurant(&self, new: &NewRestaurant) -> RepositoryResult<Restaurant>;
    /// Atomically take `amount` seats from the restaurant's vacancy.
    /// Returns `false` (and writes nothing) if the decrement would leave
    /// the vacancy negative.
    fn decrement_vacancy(&self, id: &RestaurantId, amount: GuestCount) -> RepositoryResult<bool>;
}

/// Read-only operations for the reservation ledger.
pub trait ReservationReader {
    /// Whether a confirmed reservation occupies the exact slot.
    fn has_confirmed(
        &self,
        restaurant_id: &RestaurantId,
        date: &BookingDate,
        time: &TimeOfDay,
    ) -> RepositoryResult<bool>;
    /// List all reservations for a restaurant, ordered by date and time.
    fn list_reservations_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> RepositoryResult<Vec<Reservation>>;
}

/// Write operations for the reservation ledger.
pub trait ReservationWriter {
    /// Append a reservation with a fresh identifier; returns the stored
    /// record. Conflict checking is the caller's responsibility, performed
    /// immediately before under the same per-restaurant scope.
    fn create_reservation(&self, new: &NewReservation) -> RepositoryResult<Reservation>;
}
