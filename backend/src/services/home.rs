use actix_web::{HttpResponse, Responder};

/// `GET /`: liveness check.
pub async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to the Dealership Reviews API")
}
