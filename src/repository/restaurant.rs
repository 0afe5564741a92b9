use chrono::Utc;
use diesel::prelude::*;

use crate::domain::restaurant::{NewRestaurant, Restaurant};
use crate::domain::types::{GuestCount, RestaurantId};
use crate::models::restaurant::{NewRestaurant as NewDbRestaurant, Restaurant as DbRestaurant};
use crate::repository::{
    DieselRepository, RepositoryResult, RestaurantReader, RestaurantSearchQuery, RestaurantWriter,
};

fn contains_pattern(value: &str) -> String {
    format!("%{}%", value.trim())
}

impl RestaurantReader for DieselRepository {
    fn get_restaurant_by_id(&self, id: &RestaurantId) -> RepositoryResult<Option<Restaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let row = restaurants::table
            .filter(restaurants::id.eq(id.as_str()))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        row.map(Restaurant::try_from).transpose().map_err(Into::into)
    }

    fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let rows = restaurants::table
            .filter(restaurants::is_active.eq(true))
            .order(restaurants::name.asc())
            .load::<DbRestaurant>(&mut conn)?;

        rows.into_iter()
            .map(|row| Restaurant::try_from(row).map_err(Into::into))
            .collect()
    }

    fn search_restaurants(
        &self,
        query: &RestaurantSearchQuery,
    ) -> RepositoryResult<Vec<Restaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        // LIKE is case-insensitive for ASCII in SQLite.
        let mut items = restaurants::table
            .filter(restaurants::city.like(contains_pattern(&query.city)))
            .filter(restaurants::locality.like(contains_pattern(&query.locality)))
            .filter(restaurants::cuisine.like(contains_pattern(&query.cuisine)))
            .filter(restaurants::vacancy.gt(query.min_vacancy))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            items = items.filter(restaurants::is_active.eq(true));
        }

        let rows = items
            .order(restaurants::rating.desc())
            .limit(query.limit)
            .load::<DbRestaurant>(&mut conn)?;

        rows.into_iter()
            .map(|row| Restaurant::try_from(row).map_err(Into::into))
            .collect()
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(&self, new: &NewRestaurant) -> RepositoryResult<Restaurant> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let id = RestaurantId::generate();
        let now = Utc::now().naive_utc();
        let row = diesel::insert_into(restaurants::table)
            .values(NewDbRestaurant::from_domain(&id, new, now))
            .get_result::<DbRestaurant>(&mut conn)?;

        Restaurant::try_from(row).map_err(Into::into)
    }

    fn decrement_vacancy(&self, id: &RestaurantId, amount: GuestCount) -> RepositoryResult<bool> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let now = Utc::now().naive_utc();
        let updated = diesel::update(
            restaurants::table
                .filter(restaurants::id.eq(id.as_str()))
                .filter(restaurants::vacancy.ge(amount.get())),
        )
        .set((
            restaurants::vacancy.eq(restaurants::vacancy - amount.get()),
            restaurants::updated_at.eq(now),
        ))
        .execute(&mut conn)?;

        Ok(updated == 1)
    }
}
