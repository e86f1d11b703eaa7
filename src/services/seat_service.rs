use std::sync::Arc;

use crate::models::booking::SeatMapResponse;
use crate::models::id::ShowtimeId;
use crate::models::seat;
use crate::store::catalog::CatalogStore;
use crate::store::ledger::BookingLedger;
use crate::utils::error::{AppError, AppResult};

/// Derives seat availability from the booking ledger on demand.
#[derive(Clone)]
pub struct SeatService {
    catalog: Arc<CatalogStore>,
    ledger: Arc<BookingLedger>,
}

impl SeatService {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<BookingLedger>) -> Self {
        SeatService { catalog, ledger }
    }

    /// Full seat map for a showtime: the screen's grid with every seat
    /// that appears in a committed booking flagged unavailable, plus the
    /// showtime's price map for display.
    ///
    /// Availability is recomputed from the ledger on every call; there is
    /// no cache that could go stale relative to committed bookings.
    pub async fn get_seat_map(&self, showtime_id: ShowtimeId) -> AppResult<SeatMapResponse> {
        let showtime = self
            .catalog
            .find_showtime(showtime_id)
            .await
            .ok_or_else(|| AppError::NotFound("Showtime not found".into()))?;

        let screen = self
            .catalog
            .find_screen(showtime.screen_id)
            .await
            .ok_or_else(|| AppError::NotFound("Screen not found".into()))?;

        let occupied = self.ledger.booked_seats(showtime_id).await;
        let grid = seat::resolve_grid(&screen, &occupied);

        Ok(SeatMapResponse {
            grid,
            price_map: showtime.price_map,
        })
    }
}
