use chrono::{Duration, NaiveTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::models::catalog::{
    Cinema, Movie, Screen, SeedResponse, Showtime, ShowtimeQuery, ShowtimeSummary,
};
use crate::models::id::{CinemaId, MovieId, ScreenId, ShowtimeId};
use crate::store::catalog::CatalogStore;
use crate::utils::error::{AppError, AppResult};

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        CatalogService { catalog }
    }

    pub async fn list_movies(&self) -> Vec<Movie> {
        self.catalog.list_movies().await
    }

    pub async fn get_movie(&self, id: MovieId) -> AppResult<Movie> {
        self.catalog
            .find_movie(id)
            .await
            .ok_or_else(|| AppError::NotFound("Movie not found".into()))
    }

    pub async fn list_cinemas(&self, city: Option<String>) -> Vec<Cinema> {
        self.catalog.list_cinemas(city.as_deref()).await
    }

    // List showtimes with the movie title and cinema name attached
    pub async fn list_showtimes(&self, query: ShowtimeQuery) -> Vec<ShowtimeSummary> {
        let showtimes = self.catalog.list_showtimes(&query).await;

        let mut summaries = Vec::with_capacity(showtimes.len());
        for st in showtimes {
            let movie_title = self
                .catalog
                .find_movie(st.movie_id)
                .await
                .map(|m| m.title);
            let cinema_name = self
                .catalog
                .find_cinema(st.cinema_id)
                .await
                .map(|c| c.name);
            summaries.push(ShowtimeSummary {
                id: st.id,
                movie_id: st.movie_id,
                cinema_id: st.cinema_id,
                screen_id: st.screen_id,
                start_time: st.start_time,
                language: st.language,
                price_map: st.price_map,
                movie_title,
                cinema_name,
            });
        }
        summaries
    }

    async fn seed_counts(&self) -> SeedResponse {
        SeedResponse {
            movies: self.catalog.movie_count().await,
            cinemas: self.catalog.cinema_count().await,
            screens: self.catalog.screen_count().await,
            showtimes: self.catalog.showtime_count().await,
        }
    }

    /// Seed a minimal dataset for demo usage. Idempotent: if movies already
    /// exist the current counts are returned and nothing is inserted.
    pub async fn seed_demo_data(&self) -> SeedResponse {
        if self.catalog.movie_count().await > 0 {
            return self.seed_counts().await;
        }

        let m1 = self
            .catalog
            .insert_movie(Movie {
                id: MovieId::new(),
                title: "The Red Horizon".into(),
                poster_url: Some(
                    "https://images.unsplash.com/photo-1517602302552-471fe67acf66?w=800".into(),
                ),
                languages: vec!["English".into(), "Hindi".into()],
                genres: vec!["Action".into(), "Adventure".into()],
                rating: Some(8.1),
                runtime_mins: Some(132),
                certification: Some("UA".into()),
                synopsis: Some("A daring mission to save the world from a looming threat.".into()),
            })
            .await;
        let m2 = self
            .catalog
            .insert_movie(Movie {
                id: MovieId::new(),
                title: "City Serenade".into(),
                poster_url: Some(
                    "https://images.unsplash.com/photo-1517604931442-7e0c8ed2963f?w=800".into(),
                ),
                languages: vec!["English".into()],
                genres: vec!["Drama".into(), "Romance".into()],
                rating: Some(7.4),
                runtime_mins: Some(115),
                certification: Some("U".into()),
                synopsis: Some("Two strangers connect through music and chance encounters.".into()),
            })
            .await;

        let c1 = self
            .catalog
            .insert_cinema(Cinema {
                id: CinemaId::new(),
                name: "Downtown Multiplex".into(),
                city: "Mumbai".into(),
                address: Some("MG Road".into()),
            })
            .await;
        let c2 = self
            .catalog
            .insert_cinema(Cinema {
                id: CinemaId::new(),
                name: "Skyline Cinemas".into(),
                city: "Mumbai".into(),
                address: Some("Bandra West".into()),
            })
            .await;

        let s1 = self
            .catalog
            .insert_screen(Screen {
                id: ScreenId::new(),
                cinema_id: c1,
                name: "Screen 1".into(),
                rows: 8,
                seats_per_row: 12,
            })
            .await;
        self.catalog
            .insert_screen(Screen {
                id: ScreenId::new(),
                cinema_id: c1,
                name: "Screen 2".into(),
                rows: 10,
                seats_per_row: 12,
            })
            .await;
        let s3 = self
            .catalog
            .insert_screen(Screen {
                id: ScreenId::new(),
                cinema_id: c2,
                name: "Prime Screen".into(),
                rows: 9,
                seats_per_row: 14,
            })
            .await;

        let mut price_map = IndexMap::new();
        price_map.insert("Silver".to_string(), Decimal::new(200, 0));
        price_map.insert("Gold".to_string(), Decimal::new(350, 0));
        price_map.insert("Platinum".to_string(), Decimal::new(500, 0));

        // Showtimes for the next 3 days at fixed hours
        let today = Utc::now().date_naive();
        for day_offset in 0..3 {
            let day = today + Duration::days(day_offset);
            for hour in [12, 15, 18, 21] {
                let start = day.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap());
                self.catalog
                    .insert_showtime(Showtime {
                        id: ShowtimeId::new(),
                        movie_id: m1,
                        cinema_id: c1,
                        screen_id: s1,
                        start_time: start,
                        language: "English".into(),
                        price_map: price_map.clone(),
                    })
                    .await;
                self.catalog
                    .insert_showtime(Showtime {
                        id: ShowtimeId::new(),
                        movie_id: m2,
                        cinema_id: c2,
                        screen_id: s3,
                        start_time: start,
                        language: "English".into(),
                        price_map: price_map.clone(),
                    })
                    .await;
            }
        }

        self.seed_counts().await
    }
}
