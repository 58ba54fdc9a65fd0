pub mod heartbeat;
pub mod movies;

pub use heartbeat::*;
pub use movies::*;

use actix_web::{web, Scope};

pub fn api_source() -> Scope {
    web::scope("/api")
        .route("/heartbeat", web::get().to(heartbeat))
        .service(movie_source())
}
