use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::models::booking::{BookingRequest, BookingResponse};
use crate::services::booking_service::BookingService;
use crate::utils::error::AppError;

/// Book a set of seats for a showtime
#[openapi(tag = "Book")]
#[post("/book", format = "json", data = "<request>")]
pub async fn book_seats(
    request: Json<BookingRequest>,
    booking_service: &State<BookingService>,
) -> Result<status::Created<Json<BookingResponse>>, AppError> {
    let response = booking_service.book(request.into_inner()).await?;
    let location = format!("/api/bookings/{}", response.booking_id);
    Ok(status::Created::new(location).body(Json(response)))
}
