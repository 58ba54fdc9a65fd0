use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use validator::Validate;

use super::{validation_error_response, MoviePath};
use crate::error::CatalogError;
use crate::services::MovieService;
use crate::util::ErrorMessage;

pub async fn get_movie_info(
    service: Data<MovieService>,
    path: Path<MoviePath>,
) -> Result<HttpResponse, CatalogError> {
    if let Err(error) = path.validate() {
        return Ok(validation_error_response(&error));
    }

    match service.details(path.imdb_id.as_str()).await? {
        Some(details) => {
            tracing::info!("Got movie details for {}", path.imdb_id);
            Ok(HttpResponse::Ok().json(details))
        }
        None => {
            tracing::info!("Movie {} not found", path.imdb_id);
            Ok(HttpResponse::NotFound().json(ErrorMessage::new("Not found")))
        }
    }
}
