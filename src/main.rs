use dotenv::dotenv;
use showtime_booking_system::build_rocket;

#[rocket::launch]
fn rocket() -> _ {
    dotenv().ok();
    build_rocket()
}
