use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use validator::Validate;

use super::{validation_error_response, Paginate};
use crate::error::CatalogError;
use crate::services::MovieService;

pub async fn get_movie_list(
    service: Data<MovieService>,
    info: Query<Paginate>,
) -> Result<HttpResponse, CatalogError> {
    if let Err(error) = info.validate() {
        return Ok(validation_error_response(&error));
    }

    let page = service.list_all(info.page(), info.per_page()).await?;
    tracing::info!("Got movie list page {} ({} of {})", page.page, page.items.len(), page.total);
    Ok(HttpResponse::Ok().json(page))
}
