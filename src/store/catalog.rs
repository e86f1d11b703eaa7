use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::catalog::{Cinema, Movie, Screen, Showtime, ShowtimeQuery};
use crate::models::id::{CinemaId, MovieId, ScreenId, ShowtimeId};

/// In-memory reference-data store for movies, cinemas, screens and
/// showtimes. Entities are created once (seed or admin flow) and never
/// mutated afterwards; the booking core only reads from it.
#[derive(Default)]
pub struct CatalogStore {
    movies: RwLock<HashMap<MovieId, Movie>>,
    cinemas: RwLock<HashMap<CinemaId, Cinema>>,
    screens: RwLock<HashMap<ScreenId, Screen>>,
    showtimes: RwLock<HashMap<ShowtimeId, Showtime>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_movie(&self, movie: Movie) -> MovieId {
        let id = movie.id;
        self.movies.write().await.insert(id, movie);
        id
    }

    pub async fn insert_cinema(&self, cinema: Cinema) -> CinemaId {
        let id = cinema.id;
        self.cinemas.write().await.insert(id, cinema);
        id
    }

    pub async fn insert_screen(&self, screen: Screen) -> ScreenId {
        let id = screen.id;
        self.screens.write().await.insert(id, screen);
        id
    }

    pub async fn insert_showtime(&self, showtime: Showtime) -> ShowtimeId {
        let id = showtime.id;
        self.showtimes.write().await.insert(id, showtime);
        id
    }

    pub async fn find_movie(&self, id: MovieId) -> Option<Movie> {
        self.movies.read().await.get(&id).cloned()
    }

    pub async fn find_screen(&self, id: ScreenId) -> Option<Screen> {
        self.screens.read().await.get(&id).cloned()
    }

    pub async fn find_showtime(&self, id: ShowtimeId) -> Option<Showtime> {
        self.showtimes.read().await.get(&id).cloned()
    }

    pub async fn find_cinema(&self, id: CinemaId) -> Option<Cinema> {
        self.cinemas.read().await.get(&id).cloned()
    }

    pub async fn list_movies(&self) -> Vec<Movie> {
        let mut movies: Vec<Movie> = self.movies.read().await.values().cloned().collect();
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        movies
    }

    pub async fn list_cinemas(&self, city: Option<&str>) -> Vec<Cinema> {
        let mut cinemas: Vec<Cinema> = self
            .cinemas
            .read()
            .await
            .values()
            .filter(|c| city.map_or(true, |city| c.city == city))
            .cloned()
            .collect();
        cinemas.sort_by(|a, b| a.name.cmp(&b.name));
        cinemas
    }

    pub async fn list_showtimes(&self, query: &ShowtimeQuery) -> Vec<Showtime> {
        // City filtering goes through the cinema collection, the showtime
        // itself only carries the cinema id.
        let city_cinemas: Option<Vec<CinemaId>> = match &query.city {
            Some(city) => Some(
                self.cinemas
                    .read()
                    .await
                    .values()
                    .filter(|c| &c.city == city)
                    .map(|c| c.id)
                    .collect(),
            ),
            None => None,
        };

        let mut showtimes: Vec<Showtime> = self
            .showtimes
            .read()
            .await
            .values()
            .filter(|st| query.movie_id.map_or(true, |id| st.movie_id == id))
            .filter(|st| {
                city_cinemas
                    .as_ref()
                    .map_or(true, |ids| ids.contains(&st.cinema_id))
            })
            .filter(|st| query.date.map_or(true, |d| st.start_time.date() == d))
            .cloned()
            .collect();
        showtimes.sort_by_key(|st| st.start_time);
        showtimes
    }

    pub async fn movie_count(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn cinema_count(&self) -> usize {
        self.cinemas.read().await.len()
    }

    pub async fn screen_count(&self) -> usize {
        self.screens.read().await.len()
    }

    pub async fn showtime_count(&self) -> usize {
        self.showtimes.read().await.len()
    }
}
