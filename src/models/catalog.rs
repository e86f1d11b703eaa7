use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::id::{CinemaId, MovieId, ScreenId, ShowtimeId};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
    pub languages: Vec<String>,
    pub genres: Vec<String>,
    pub rating: Option<f32>,
    pub runtime_mins: Option<u16>,
    pub certification: Option<String>,
    pub synopsis: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Cinema {
    pub id: CinemaId,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
}

/// A physical screen. `rows` and `seats_per_row` define the addressable
/// seat space: row letters 'A'.. paired with columns 1..=seats_per_row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Screen {
    pub id: ScreenId,
    pub cinema_id: CinemaId,
    pub name: String,
    pub rows: u8,
    pub seats_per_row: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Showtime {
    pub id: ShowtimeId,
    pub movie_id: MovieId,
    pub cinema_id: CinemaId,
    pub screen_id: ScreenId,
    pub start_time: NaiveDateTime,
    pub language: String,
    /// Seat category -> price. Kept ordered for stable display.
    pub price_map: IndexMap<String, Decimal>,
}

/// Filters for the showtime listing; all optional, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ShowtimeQuery {
    pub movie_id: Option<MovieId>,
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Showtime row with the movie title and cinema name attached for listings.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ShowtimeSummary {
    pub id: ShowtimeId,
    pub movie_id: MovieId,
    pub cinema_id: CinemaId,
    pub screen_id: ScreenId,
    pub start_time: NaiveDateTime,
    pub language: String,
    pub price_map: IndexMap<String, Decimal>,
    pub movie_title: Option<String>,
    pub cinema_name: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SeedResponse {
    pub movies: usize,
    pub cinemas: usize,
    pub screens: usize,
    pub showtimes: usize,
}
