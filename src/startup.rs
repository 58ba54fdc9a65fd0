use crate::configuration::Settings;
use crate::repository::MovieRepository;
use crate::routes::api_source;
use crate::services::{MovieService, RatingsService};

use actix_web::{dev::Server, web::Data, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use actix_cors::Cors;
use actix_web::http::header;

fn configure_cors(frontend_url: &str) -> Cors {
    let mut cors = Cors::default();
    cors = if frontend_url == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(frontend_url)
    };
    cors.allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn run_server(
    listener: TcpListener,
    db_pool: SqlitePool,
    settings: &Settings,
) -> Result<Server, std::io::Error> {
    let ratings = RatingsService::new(settings.ratings.clone()).map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to build ratings client: {}", err),
        )
    })?;
    let movie_service = Data::new(MovieService::new(
        MovieRepository::new(db_pool),
        Arc::new(ratings),
    ));
    let frontend_url = settings.frontend_url.clone();

    let server = HttpServer::new(move || {
        let cors = configure_cors(frontend_url.as_str());

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .service(api_source())
            .app_data(movie_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
