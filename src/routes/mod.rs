use actix_web::{HttpResponse, Responder, get};
use serde::Serialize;

pub mod reservations;
pub mod restaurants;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}
