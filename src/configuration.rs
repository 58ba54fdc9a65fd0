use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application_port: u16,
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub ratings: RatingsSettings,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

/// How the local ratings service expects a movie to be addressed.
#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(from = "String")]
pub enum LocalRatingMode {
    /// `/ratings/<movieId>`
    MovieId,
    /// `/ratings/<imdbId>`
    #[default]
    Imdb,
}

impl From<String> for LocalRatingMode {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("movieid") {
            LocalRatingMode::MovieId
        } else {
            LocalRatingMode::Imdb
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct RatingsSettings {
    pub local_base_url: String,
    pub local_mode: LocalRatingMode,
    pub omdb_base_url: String,
    pub omdb_api_key: Option<String>,
    pub request_timeout_ms: u64,
}

impl Default for RatingsSettings {
    fn default() -> Self {
        Self {
            local_base_url: "http://localhost:3000".to_string(),
            local_mode: LocalRatingMode::default(),
            omdb_base_url: "https://www.omdbapi.com".to_string(),
            omdb_api_key: None,
            request_timeout_ms: 5000,
        }
    }
}

impl RatingsSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_frontend_url() -> String {
    "*".to_string()
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let builder = Config::builder()
        .set_default("application_port", 4000_i64)?
        .add_source(File::new(filename, FileFormat::Json))
        .set_override_option("application_port", env_value("PORT"))?
        .set_override_option("frontend_url", env_value("FRONTEND_URL"))?
        .set_override_option("database.path", env_value("DATABASE_PATH"))?
        .set_override_option("ratings.local_base_url", env_value("RATINGS_API_BASE"))?
        .set_override_option(
            "ratings.local_mode",
            env_value("RATINGS_API_MODE").map(|mode| mode.to_lowercase()),
        )?
        .set_override_option("ratings.omdb_base_url", env_value("OMDB_API_BASE"))?
        .set_override_option("ratings.omdb_api_key", env_value("OMDB_API_KEY"))?;
    let config = builder.build()?;
    config.try_deserialize()
}
