pub mod booking_route;
pub mod catalog_route;
pub mod seat_route;

use rocket::serde::json::{json, Json, Value};

/// Liveness message at the root path.
#[get("/")]
pub fn root() -> Json<Value> {
    Json(json!({ "message": "ShowTime API running" }))
}
