use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use validator::Validate;

use super::{validation_error_response, GenrePath, Paginate};
use crate::error::CatalogError;
use crate::services::MovieService;

pub async fn get_movies_by_genre(
    service: Data<MovieService>,
    path: Path<GenrePath>,
    info: Query<Paginate>,
) -> Result<HttpResponse, CatalogError> {
    if let Err(error) = path.validate().and_then(|_| info.validate()) {
        return Ok(validation_error_response(&error));
    }

    let page = service
        .list_by_genre(path.genre.as_str(), info.page(), info.per_page())
        .await?;
    tracing::info!("Got movies for genre {}", path.genre);
    Ok(HttpResponse::Ok().json(page))
}
