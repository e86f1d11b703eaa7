use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

use showtime_booking_system::build_rocket;

async fn client() -> Client {
    Client::tracked(build_rocket())
        .await
        .expect("valid rocket instance")
}

/// Seed the demo catalog and return the id of one showtime.
async fn seeded_showtime_id(client: &Client) -> String {
    let response = client.post("/api/seed").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let counts: Value = response.into_json().await.expect("seed response");
    assert_eq!(counts["movies"], 2);

    let response = client.get("/api/showtimes").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let showtimes: Value = response.into_json().await.expect("showtime list");
    let first = &showtimes.as_array().expect("array")[0];
    assert!(first["movie_title"].is_string());
    assert!(first["cinema_name"].is_string());
    first["id"].as_str().expect("showtime id").to_string()
}

fn book_body(showtime_id: &str, seats: &[&str]) -> String {
    json!({
        "showtime_id": showtime_id,
        "customer_name": "Asha Rao",
        "customer_email": "asha@example.com",
        "seats": seats,
    })
    .to_string()
}

#[rocket::async_test]
async fn test_book_then_conflict_over_http() {
    let client = client().await;
    let showtime_id = seeded_showtime_id(&client).await;

    let response = client
        .post("/api/book")
        .header(ContentType::JSON)
        .body(book_body(&showtime_id, &["A1", "A2"]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let booking: Value = response.into_json().await.expect("booking response");
    assert!(booking["booking_id"].is_string());
    // Demo price map has Gold = 350; two seats
    assert_eq!(booking["total"], json!("700"));

    // Overlap on A2 -> 409, nothing further committed
    let response = client
        .post("/api/book")
        .header(ContentType::JSON)
        .body(book_body(&showtime_id, &["A2", "A3"]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Conflict);

    // The seat map reflects only the committed booking
    let response = client
        .get(format!("/api/seats/{}", showtime_id))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let seat_map: Value = response.into_json().await.expect("seat map");
    let first_row = &seat_map["grid"][0];
    assert_eq!(first_row[0]["code"], "A1");
    assert_eq!(first_row[0]["available"], false);
    assert_eq!(first_row[1]["available"], false);
    assert_eq!(first_row[2]["available"], true);
}

#[rocket::async_test]
async fn test_booking_error_status_codes() {
    let client = client().await;
    let showtime_id = seeded_showtime_id(&client).await;

    // Unknown but well-formed showtime id -> 404
    let response = client
        .post("/api/book")
        .header(ContentType::JSON)
        .body(book_body("00000000-0000-4000-8000-000000000000", &["A1"]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    // Empty seat list -> 400
    let response = client
        .post("/api/book")
        .header(ContentType::JSON)
        .body(book_body(&showtime_id, &[]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    // Seat outside the 8x12 demo screen -> 422
    let response = client
        .post("/api/book")
        .header(ContentType::JSON)
        .body(book_body(&showtime_id, &["Z99"]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[rocket::async_test]
async fn test_seat_map_status_codes() {
    let client = client().await;
    seeded_showtime_id(&client).await;

    // Malformed id -> 400
    let response = client.get("/api/seats/not-a-uuid").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);

    // Unknown id -> 404
    let response = client
        .get("/api/seats/00000000-0000-4000-8000-000000000000")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_catalog_listing_routes() {
    let client = client().await;
    seeded_showtime_id(&client).await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.get("/api/movies").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let movies: Value = response.into_json().await.expect("movies");
    assert_eq!(movies.as_array().expect("array").len(), 2);
    let movie_id = movies[0]["id"].as_str().expect("movie id").to_string();

    let response = client.get(format!("/api/movies/{}", movie_id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.get("/api/cinemas?city=Mumbai").dispatch().await;
    let cinemas: Value = response.into_json().await.expect("cinemas");
    assert_eq!(cinemas.as_array().expect("array").len(), 2);

    let response = client.get("/api/cinemas?city=Delhi").dispatch().await;
    let cinemas: Value = response.into_json().await.expect("cinemas");
    assert!(cinemas.as_array().expect("array").is_empty());

    // Seeding twice keeps the counts unchanged
    let response = client.post("/api/seed").dispatch().await;
    let counts: Value = response.into_json().await.expect("seed response");
    assert_eq!(counts["movies"], 2);
    assert_eq!(counts["cinemas"], 2);
}
