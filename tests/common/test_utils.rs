#![allow(dead_code)]

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use showtime_booking_system::models::booking::BookingRequest;
use showtime_booking_system::models::catalog::{Cinema, Movie, Screen, Showtime};
use showtime_booking_system::models::id::{CinemaId, MovieId, ScreenId, ShowtimeId};
use showtime_booking_system::store::catalog::CatalogStore;

macro_rules! test_println {
    ($test_name:expr, $($arg:tt)*) => {
        println!("[{}] {}", $test_name, format!($($arg)*))
    };
}
pub(crate) use test_println;

pub fn price_map_with_gold(gold_rate: Decimal) -> IndexMap<String, Decimal> {
    let mut price_map = IndexMap::new();
    price_map.insert("Silver".to_string(), Decimal::new(200, 0));
    price_map.insert("Gold".to_string(), gold_rate);
    price_map.insert("Platinum".to_string(), Decimal::new(500, 0));
    price_map
}

/// Insert a movie, cinema, screen with the given geometry and one showtime
/// on that screen. Returns the showtime id to book against.
pub async fn seed_showtime_with_prices(
    catalog: &CatalogStore,
    rows: u8,
    seats_per_row: u16,
    price_map: IndexMap<String, Decimal>,
) -> ShowtimeId {
    let movie_id = catalog
        .insert_movie(Movie {
            id: MovieId::new(),
            title: "Test Feature".into(),
            poster_url: None,
            languages: vec!["English".into()],
            genres: vec!["Drama".into()],
            rating: None,
            runtime_mins: Some(120),
            certification: None,
            synopsis: None,
        })
        .await;

    let cinema_id = catalog
        .insert_cinema(Cinema {
            id: CinemaId::new(),
            name: "Test Cinema".into(),
            city: "Mumbai".into(),
            address: None,
        })
        .await;

    let screen_id = catalog
        .insert_screen(Screen {
            id: ScreenId::new(),
            cinema_id,
            name: "Test Screen".into(),
            rows,
            seats_per_row,
        })
        .await;

    catalog
        .insert_showtime(Showtime {
            id: ShowtimeId::new(),
            movie_id,
            cinema_id,
            screen_id,
            start_time: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            language: "English".into(),
            price_map,
        })
        .await
}

/// Seed with the standard demo price map (Gold = 350).
pub async fn seed_showtime(catalog: &CatalogStore, rows: u8, seats_per_row: u16) -> ShowtimeId {
    seed_showtime_with_prices(
        catalog,
        rows,
        seats_per_row,
        price_map_with_gold(Decimal::new(350, 0)),
    )
    .await
}

pub fn booking_request(showtime_id: ShowtimeId, seats: &[&str]) -> BookingRequest {
    BookingRequest {
        showtime_id,
        customer_name: "Asha Rao".to_string(),
        customer_email: "asha@example.com".to_string(),
        seats: seats.iter().map(|s| s.to_string()).collect(),
    }
}
