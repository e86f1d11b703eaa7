use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::models::booking::Booking;
use crate::models::id::{BookingId, ShowtimeId};

/// Append-only ledger of committed bookings, sharded by showtime.
///
/// Every showtime gets its own mutex-guarded shard. `commit_if_free`
/// holds the shard lock across the conflict check and the append, so
/// two overlapping requests for the same showtime can never both pass
/// the check. Bookings for different showtimes live in different shards
/// and never block each other.
#[derive(Default)]
pub struct BookingLedger {
    shards: RwLock<HashMap<ShowtimeId, Arc<Mutex<Vec<Booking>>>>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    async fn shard(&self, showtime_id: ShowtimeId) -> Option<Arc<Mutex<Vec<Booking>>>> {
        self.shards.read().await.get(&showtime_id).cloned()
    }

    async fn shard_or_insert(&self, showtime_id: ShowtimeId) -> Arc<Mutex<Vec<Booking>>> {
        if let Some(shard) = self.shard(showtime_id).await {
            return shard;
        }
        self.shards
            .write()
            .await
            .entry(showtime_id)
            .or_insert_with(|| Arc::new(Mutex::new(Vec::new())))
            .clone()
    }

    /// Snapshot of every committed booking for a showtime, in commit order.
    /// Taken under the shard lock, so a reader never observes a half-applied
    /// commit.
    pub async fn bookings_for_showtime(&self, showtime_id: ShowtimeId) -> Vec<Booking> {
        match self.shard(showtime_id).await {
            Some(shard) => shard.lock().await.clone(),
            None => Vec::new(),
        }
    }

    /// Union of seat codes across every committed booking for a showtime.
    pub async fn booked_seats(&self, showtime_id: ShowtimeId) -> HashSet<String> {
        self.bookings_for_showtime(showtime_id)
            .await
            .into_iter()
            .flat_map(|b| b.seats)
            .collect()
    }

    /// Commit a booking iff none of its seats are already committed for
    /// the same showtime. On conflict, returns the contested seat codes
    /// and leaves the ledger untouched; the booking either lands as a
    /// whole or not at all.
    pub async fn commit_if_free(&self, booking: Booking) -> Result<BookingId, Vec<String>> {
        let shard = self.shard_or_insert(booking.showtime_id).await;
        let mut bookings = shard.lock().await;

        let occupied: HashSet<&str> = bookings
            .iter()
            .flat_map(|b| b.seats.iter().map(String::as_str))
            .collect();
        let contested: Vec<String> = booking
            .seats
            .iter()
            .filter(|code| occupied.contains(code.as_str()))
            .cloned()
            .collect();
        if !contested.is_empty() {
            return Err(contested);
        }

        let id = booking.id;
        bookings.push(booking);
        Ok(id)
    }
}
