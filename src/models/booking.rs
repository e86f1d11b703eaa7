use indexmap::IndexMap;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::id::{BookingId, ShowtimeId};
use crate::models::seat::SeatEntry;

/// A committed booking. Immutable once it enters the ledger; there is no
/// partial cancellation or modification.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Booking {
    pub id: BookingId,
    pub showtime_id: ShowtimeId,
    pub customer_name: String,
    pub customer_email: String,
    pub seats: Vec<String>,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BookingRequest {
    pub showtime_id: ShowtimeId,
    pub customer_name: String,
    pub customer_email: String,
    pub seats: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub total: Decimal,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SeatMapResponse {
    pub grid: Vec<Vec<SeatEntry>>,
    pub price_map: IndexMap<String, Decimal>,
}
