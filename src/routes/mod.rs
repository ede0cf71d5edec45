use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod item;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // malformed or incomplete JSON bodies become a 400
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }));

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/items")
            .service(item::list::list)
            .service(item::create::create)
            .service(item::update::update)
            .service(item::delete::delete),
    );
}
