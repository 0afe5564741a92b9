use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::restaurant::NewRestaurant;
use crate::dto::ErrorResponse;
use crate::dto::restaurants::{RestaurantResponse, RestaurantSearchResponse, SearchResults};
use crate::forms::restaurants::{
    CreateRestaurantForm, SearchRestaurantsForm, SearchRestaurantsFormPayload,
};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::restaurants::{
    create_restaurant as create_restaurant_service, list_restaurants as list_restaurants_service,
    populate_sample_restaurants as populate_service, search_restaurants as search_service,
};

fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(message))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorResponse::server_error("internal error"))
        }
    }
}

#[post("/api/v1/restaurants")]
pub async fn create_restaurant(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateRestaurantForm>,
) -> impl Responder {
    let new_restaurant: NewRestaurant = match form.try_into() {
        Ok(new_restaurant) => new_restaurant,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string())),
    };

    match create_restaurant_service(&new_restaurant, repo.get_ref()) {
        Ok(restaurant) => HttpResponse::Ok().json(RestaurantResponse::from(restaurant)),
        Err(e) => service_error_response(e),
    }
}

#[get("/api/v1/restaurants")]
pub async fn list_restaurants(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_restaurants_service(repo.get_ref()) {
        Ok(restaurants) => HttpResponse::Ok().json(
            restaurants
                .into_iter()
                .map(RestaurantResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => service_error_response(e),
    }
}

#[post("/api/v1/restaurants/search")]
pub async fn search_restaurants(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SearchRestaurantsForm>,
) -> impl Responder {
    let payload: SearchRestaurantsFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string())),
    };

    match search_service(&payload, repo.get_ref()) {
        Ok(hits) if hits.is_empty() => HttpResponse::NotFound().json(SearchResults {
            restaurants: Vec::new(),
        }),
        Ok(hits) => HttpResponse::Ok().json(
            hits.into_iter()
                .map(RestaurantSearchResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => service_error_response(e),
    }
}

#[post("/api/v1/restaurants/populate")]
pub async fn populate_restaurants(repo: web::Data<DieselRepository>) -> impl Responder {
    match populate_service(repo.get_ref()) {
        Ok(restaurants) => HttpResponse::Ok().json(
            restaurants
                .into_iter()
                .map(RestaurantResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => service_error_response(e),
    }
}
