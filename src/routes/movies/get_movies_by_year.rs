use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use validator::Validate;

use super::{validation_error_response, OrderQuery, Paginate, YearPath};
use crate::error::CatalogError;
use crate::services::MovieService;

pub async fn get_movies_by_year(
    service: Data<MovieService>,
    path: Path<YearPath>,
    info: Query<Paginate>,
    order: Query<OrderQuery>,
) -> Result<HttpResponse, CatalogError> {
    let validation = path
        .validate()
        .and_then(|_| info.validate())
        .and_then(|_| order.validate());
    if let Err(error) = validation {
        return Ok(validation_error_response(&error));
    }

    let page = service
        .list_by_year(path.year, info.page(), info.per_page(), order.sort_order())
        .await?;
    tracing::info!("Got movies for year {}", path.year);
    Ok(HttpResponse::Ok().json(page))
}
