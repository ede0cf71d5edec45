use actix_web::{delete, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::MessageRes;

#[delete("/{id:\\d+}")]
pub async fn delete(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    db.delete_item(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageRes {
        message: "Item deleted".to_string(),
    }))
}
