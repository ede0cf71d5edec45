use actix_web::{get, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

#[get("")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(Response {
        status: "ok".to_string(),
    })
}
