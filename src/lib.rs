#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod swagger;
pub mod utils;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;
use std::sync::Arc;

use crate::services::booking_service::BookingService;
use crate::services::catalog_service::CatalogService;
use crate::services::seat_service::SeatService;
use crate::store::catalog::CatalogStore;
use crate::store::ledger::BookingLedger;

/// Assemble the rocket with fresh in-memory stores. Used by `main` and by
/// the HTTP-level integration tests.
pub fn build_rocket() -> Rocket<Build> {
    let catalog = Arc::new(CatalogStore::new());
    let ledger = Arc::new(BookingLedger::new());

    rocket::build()
        .manage(CatalogService::new(catalog.clone()))
        .manage(SeatService::new(catalog.clone(), ledger.clone()))
        .manage(BookingService::new(catalog, ledger))
        .mount("/", routes![routes::root])
        .mount(
            "/api",
            openapi_get_routes![
                routes::catalog_route::seed,
                routes::catalog_route::list_movies,
                routes::catalog_route::get_movie,
                routes::catalog_route::list_cinemas,
                routes::catalog_route::list_showtimes,
                routes::seat_route::get_seat_map,
                routes::booking_route::book_seats,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger::swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
