use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::{CreateItem, ItemCreateRes};

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<CreateItem>,
) -> Result<HttpResponse, AppError> {
    let item = db.create_item(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ItemCreateRes {
        message: "Item created".to_string(),
        id: item.id,
    }))
}
