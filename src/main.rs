use dotenv::dotenv;
use movie_api_backend::configuration::get_configuration;
use movie_api_backend::startup;
use movie_api_backend::telemetry::{get_subscriber, init_subscriber};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber("movie_api", "info", std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration("configuration").map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "Failed to read `configuration.json`. Please make sure it exists and is valid JSON: {}",
                err
            ),
        )
    })?;

    let connect_options = SqliteConnectOptions::new()
        .filename(&configuration.database.path)
        .read_only(true);
    let connection_pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await
        .map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "Failed to open movie database at {}: {}",
                    configuration.database.path, err
                ),
            )
        })?;

    let listener = TcpListener::bind(("0.0.0.0", configuration.application_port))?;
    tracing::info!(
        "[movie-api] listening on http://localhost:{}",
        configuration.application_port
    );
    startup::run_server(listener, connection_pool, &configuration)?.await
}
