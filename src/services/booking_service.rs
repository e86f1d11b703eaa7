use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::booking::{Booking, BookingRequest, BookingResponse};
use crate::models::id::BookingId;
use crate::models::seat;
use crate::store::catalog::CatalogStore;
use crate::store::ledger::BookingLedger;
use crate::utils::error::{AppError, AppResult};

/// Every booking is charged a flat per-seat rate taken from this category
/// of the showtime's price map, regardless of seat position.
pub const FLAT_RATE_CATEGORY: &str = "Gold";

fn fallback_rate() -> Decimal {
    Decimal::new(300, 0)
}

/// Admission control for bookings: validates a request, checks the
/// requested seats against the ledger and commits the booking as a
/// single unit, or rejects it without touching the ledger.
#[derive(Clone)]
pub struct BookingService {
    catalog: Arc<CatalogStore>,
    ledger: Arc<BookingLedger>,
}

impl BookingService {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<BookingLedger>) -> Self {
        BookingService { catalog, ledger }
    }

    pub async fn book(&self, request: BookingRequest) -> AppResult<BookingResponse> {
        let showtime = self
            .catalog
            .find_showtime(request.showtime_id)
            .await
            .ok_or_else(|| AppError::NotFound("Showtime not found".into()))?;

        if request.seats.is_empty() {
            return Err(AppError::ValidationError(
                "Seat list must not be empty".into(),
            ));
        }

        let screen = self
            .catalog
            .find_screen(showtime.screen_id)
            .await
            .ok_or_else(|| AppError::NotFound("Screen not found".into()))?;

        {
            let mut seen = HashSet::new();
            for code in &request.seats {
                let (row_index, column) = seat::parse_seat_code(code).ok_or_else(|| {
                    AppError::ValidationError(format!("Malformed seat code: {}", code))
                })?;
                if !seen.insert(code.as_str()) {
                    return Err(AppError::ValidationError(format!(
                        "Duplicate seat code: {}",
                        code
                    )));
                }
                if !seat::seat_in_layout(&screen, row_index, column) {
                    return Err(AppError::InvalidSeat(format!(
                        "Seat {} is outside the layout of screen {}",
                        code, screen.name
                    )));
                }
            }
        }

        let rate = showtime
            .price_map
            .get(FLAT_RATE_CATEGORY)
            .copied()
            .unwrap_or_else(fallback_rate);
        let total = rate * Decimal::from(request.seats.len() as u64);

        let booking = Booking {
            id: BookingId::new(),
            showtime_id: request.showtime_id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            seats: request.seats,
            total_amount: total,
        };

        // The ledger re-checks the seats under the showtime's shard lock,
        // so a racing request that passed its own checks cannot slip in
        // between our check and the append.
        match self.ledger.commit_if_free(booking).await {
            Ok(booking_id) => Ok(BookingResponse { booking_id, total }),
            Err(contested) => Err(AppError::Conflict(format!(
                "Seats already booked: {}",
                contested.join(", ")
            ))),
        }
    }
}
