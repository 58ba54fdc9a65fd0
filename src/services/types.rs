use serde::Serialize;

use super::{format_usd, parse_name_list};
use crate::repository::MovieRecord;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Budget {
    pub raw: Option<i64>,
    pub usd: Option<String>,
}

impl Budget {
    pub fn new(raw: Option<i64>) -> Self {
        Self {
            raw,
            usd: format_usd(raw),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSource {
    Local,
    RottenTomatoes,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub source: RatingSource,
    pub value: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieListItem {
    pub imdb_id: Option<String>,
    pub title: String,
    pub genres: Vec<String>,
    pub release_date: Option<String>,
    pub budget: Budget,
}

impl From<MovieRecord> for MovieListItem {
    fn from(record: MovieRecord) -> Self {
        Self {
            genres: parse_name_list(record.genres.as_deref()),
            budget: Budget::new(record.budget),
            imdb_id: record.imdb_id,
            title: record.title,
            release_date: record.release_date,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub items: Vec<MovieListItem>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub imdb_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub budget: Budget,
    pub runtime: Option<i64>,
    pub average_rating: Option<f64>,
    pub ratings: Vec<Rating>,
    pub genres: Vec<String>,
    pub original_language: Option<String>,
    pub production_companies: Vec<String>,
}

impl MovieDetails {
    pub fn new(record: MovieRecord, ratings: Vec<Rating>, average_rating: Option<f64>) -> Self {
        Self {
            genres: parse_name_list(record.genres.as_deref()),
            production_companies: parse_name_list(record.production_companies.as_deref()),
            budget: Budget::new(record.budget),
            imdb_id: record.imdb_id,
            title: record.title,
            description: record.overview,
            release_date: record.release_date,
            runtime: record.runtime,
            average_rating,
            ratings,
            original_language: record.language,
        }
    }
}
