use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::models::booking::SeatMapResponse;
use crate::models::id::ShowtimeId;
use crate::services::seat_service::SeatService;
use crate::utils::error::AppError;

/// Seat map for a showtime: the full grid with availability flags plus
/// the showtime's price map
#[openapi(tag = "Seats")]
#[get("/seats/<showtime_id>")]
pub async fn get_seat_map(
    showtime_id: String,
    seat_service: &State<SeatService>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let showtime_id = ShowtimeId::parse(&showtime_id)
        .ok_or_else(|| AppError::BadRequest("Invalid showtime id".into()))?;
    let seat_map = seat_service.get_seat_map(showtime_id).await?;
    Ok(Json(seat_map))
}
