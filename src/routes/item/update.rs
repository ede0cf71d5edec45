use actix_web::{put, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::UpdateItem;
use crate::types::response::MessageRes;

#[put("/{id:\\d+}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
    body: web::Json<UpdateItem>,
) -> Result<HttpResponse, AppError> {
    db.update_item(path.into_inner(), body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageRes {
        message: "Item updated".to_string(),
    }))
}
