use actix_web::{middleware::Compress, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use helpbot::middleware::{cors, error_handler, Logging};
use helpbot::routes;
use helpbot::service::{ChatService, OpenAiClient};
use helpbot::utils::init;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 설정 및 로깅 초기화
    let config = init::init()
        .await
        .context("Failed to initialize application")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let llm = OpenAiClient::new(&config.llm).map_err(helpbot::AppError::from)?;
    log::info!("Using LLM model {}", llm.model());

    let chat_service =
        web::Data::new(ChatService::new(Arc::new(llm), config.locales.default.clone()));

    let server_config = config.clone();
    let host = server_config.server.host.clone();
    let port = server_config.server.port;
    log::info!("Starting Helpbot API on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(chat_service.clone())
            .wrap(error_handler())
            .wrap(Logging)
            .wrap(cors(&server_config.cors.allowed_origins))
            .wrap(Compress::default())
            .configure(routes::configure)
    })
    .client_request_timeout(Duration::from_secs(config.server.client_request_timeout))
    .bind((host, port))?
    .shutdown_timeout(config.server.shutdown_timeout)
    .run()
    .await
}
