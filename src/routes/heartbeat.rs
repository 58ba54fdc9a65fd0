use actix_web::HttpResponse;
use serde::Serialize;

pub const SERVICE_NAME: &str = "movie-api-backend";

#[derive(Serialize, Debug)]
pub struct Heartbeat {
    pub ok: bool,
    pub service: String,
}

pub async fn heartbeat() -> HttpResponse {
    tracing::info!("Heartbeat Handler");
    HttpResponse::Ok().json(Heartbeat {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}
