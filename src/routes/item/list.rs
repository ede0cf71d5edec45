use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

#[get("")]
pub async fn list(db: web::Data<Arc<PostgresService>>) -> Result<HttpResponse, AppError> {
    let items = db.get_all_items().await?;
    Ok(HttpResponse::Ok().json(items))
}
