use crate::controller::{chatbot_routes, welcome};
use crate::middleware::json_error_handler;
use actix_web::web;

/// Registers every endpoint; the caller supplies `web::Data<ChatService>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(welcome)
        .service(chatbot_routes());
}
