use actix_web::{HttpResponse, Responder, post, web};

use crate::domain::booking::BookingOutcome;
use crate::dto::ErrorResponse;
use crate::dto::reservations::{ReservationFailure, ReservationResponse};
use crate::forms::reservations::{ReserveTableForm, ReserveTableFormPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::booking::{BookingLocks, reserve_table as reserve_table_service};

#[post("/api/v1/restaurants/reserve")]
pub async fn reserve_table(
    repo: web::Data<DieselRepository>,
    locks: web::Data<BookingLocks>,
    web::Json(form): web::Json<ReserveTableForm>,
) -> impl Responder {
    let payload: ReserveTableFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string())),
    };

    match reserve_table_service(&payload, repo.get_ref(), locks.get_ref()) {
        Ok(BookingOutcome::Confirmed {
            reservation_id,
            table_number,
            instructions,
        }) => HttpResponse::Ok().json(ReservationResponse {
            reservation_id,
            table_number,
            status: "confirmed",
            instructions,
            alternate_slots: Vec::new(),
        }),
        Ok(outcome @ BookingOutcome::InvalidRestaurant { .. }) => {
            HttpResponse::NotFound().json(ReservationFailure::from(&outcome))
        }
        Ok(outcome) => HttpResponse::Conflict().json(ReservationFailure::from(&outcome)),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(message))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Internal) => {
            HttpResponse::InternalServerError().json(ErrorResponse::server_error("internal error"))
        }
    }
}
