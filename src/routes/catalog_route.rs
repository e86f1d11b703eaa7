use chrono::NaiveDate;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::models::catalog::{Cinema, Movie, SeedResponse, ShowtimeQuery, ShowtimeSummary};
use crate::models::id::MovieId;
use crate::services::catalog_service::CatalogService;
use crate::utils::error::AppError;

/// Seed a minimal demo dataset; safe to call repeatedly
#[openapi(tag = "Catalog")]
#[post("/seed")]
pub async fn seed(catalog_service: &State<CatalogService>) -> Json<SeedResponse> {
    Json(catalog_service.seed_demo_data().await)
}

/// List all movies
#[openapi(tag = "Catalog")]
#[get("/movies")]
pub async fn list_movies(catalog_service: &State<CatalogService>) -> Json<Vec<Movie>> {
    Json(catalog_service.list_movies().await)
}

/// Get a single movie
#[openapi(tag = "Catalog")]
#[get("/movies/<movie_id>")]
pub async fn get_movie(
    movie_id: String,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Movie>, AppError> {
    let movie_id = MovieId::parse(&movie_id)
        .ok_or_else(|| AppError::BadRequest("Invalid movie id".into()))?;
    let movie = catalog_service.get_movie(movie_id).await?;
    Ok(Json(movie))
}

/// List cinemas, optionally filtered by city
#[openapi(tag = "Catalog")]
#[get("/cinemas?<city>")]
pub async fn list_cinemas(
    city: Option<String>,
    catalog_service: &State<CatalogService>,
) -> Json<Vec<Cinema>> {
    Json(catalog_service.list_cinemas(city).await)
}

/// List showtimes filtered by movie, city and/or date
#[openapi(tag = "Catalog")]
#[get("/showtimes?<movie_id>&<city>&<date>")]
pub async fn list_showtimes(
    movie_id: Option<String>,
    city: Option<String>,
    date: Option<String>,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Vec<ShowtimeSummary>>, AppError> {
    let movie_id = match movie_id {
        Some(raw) => Some(
            MovieId::parse(&raw).ok_or_else(|| AppError::BadRequest("Invalid movie id".into()))?,
        ),
        None => None,
    };

    let date = match date {
        Some(raw) => Some(
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest("Invalid date format".into()))?,
        ),
        None => None,
    };

    let query = ShowtimeQuery {
        movie_id,
        city,
        date,
    };
    Ok(Json(catalog_service.list_showtimes(query).await))
}
