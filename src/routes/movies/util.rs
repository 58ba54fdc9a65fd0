use std::borrow::Cow;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse, Scope};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{get_movie_info, get_movie_list, get_movies_by_genre, get_movies_by_year};
use crate::repository::SortOrder;
use crate::util::ErrorMessage;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 50;
pub const MAX_PER_PAGE: u32 = 200;

#[derive(Deserialize, Validate, Debug)]
pub struct Paginate {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,
    #[serde(rename = "perPage")]
    #[validate(range(min = 1, max = MAX_PER_PAGE, message = "perPage must be between 1 and 200"))]
    pub per_page: Option<u32>,
}

impl Paginate {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }
}

#[derive(Deserialize, Validate, Debug)]
pub struct OrderQuery {
    #[validate(custom(function = "validate_order"))]
    pub order: Option<String>,
}

impl OrderQuery {
    pub fn sort_order(&self) -> SortOrder {
        match self.order.as_deref() {
            Some(order) if order.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Deserialize, Validate, Debug)]
pub struct YearPath {
    #[validate(range(min = 1800, max = 3000, message = "year must be between 1800 and 3000"))]
    pub year: i32,
}

#[derive(Deserialize, Validate, Debug)]
pub struct GenrePath {
    #[validate(custom(function = "validate_genre"))]
    pub genre: String,
}

#[derive(Deserialize, Validate, Debug)]
pub struct MoviePath {
    #[validate(length(min = 2, message = "imdbId must be at least 2 characters long"))]
    pub imdb_id: String,
}

pub fn validate_order(order: &str) -> Result<(), ValidationError> {
    if order.eq_ignore_ascii_case("asc") || order.eq_ignore_ascii_case("desc") {
        return Ok(());
    }
    Err(ValidationError::new("Invalid order").with_message(Cow::from("order must be asc or desc")))
}

pub fn validate_genre(genre: &str) -> Result<(), ValidationError> {
    if genre.trim().is_empty() {
        return Err(
            ValidationError::new("Invalid genre").with_message(Cow::from("genre Can't be empty"))
        );
    }
    Ok(())
}

/// 400 carrying the first validation message found.
pub fn validation_error_response(error: &ValidationErrors) -> HttpResponse {
    let source = error.field_errors();
    for i in source.iter() {
        for err in i.1.iter() {
            if let Some(message) = err.message.as_ref() {
                tracing::error!("Error: {}", message.as_ref());
                return HttpResponse::BadRequest().json(ErrorMessage::new(message.as_ref()));
            }
        }
    }
    HttpResponse::BadRequest().json(ErrorMessage::new("Invalid request"))
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(ErrorMessage::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn movie_source() -> Scope {
    web::scope("/movies")
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
        .route("", web::get().to(get_movie_list))
        .route("/year/{year}", web::get().to(get_movies_by_year))
        .route("/genre/{genre}", web::get().to(get_movies_by_genre))
        .route("/{imdb_id}", web::get().to(get_movie_info))
}
