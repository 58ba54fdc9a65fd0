use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::util::ErrorMessage;

/// Failures the catalog surfaces to its callers.
///
/// Missing records are not errors (`Ok(None)`), and rating provider failures
/// never leave the ratings service, so the store is the only source here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("movie catalog query failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("{}", self);
        HttpResponse::build(self.status_code()).json(ErrorMessage::new("Internal server error"))
    }
}
