//! Helpbot API
//!
//! CAR PARTER chatbot service: forwards user questions to an LLM provider and turns
//! complete chat transcripts into structured repair-request summaries.
//!
//! # Modules
//! - `controller`: HTTP handlers for `/` and `/chatbot/*`
//! - `entities`: Request/response DTOs and prompt messages
//! - `error`: Application error type and JSON error responses
//! - `middleware`: Request logging, error conversion and CORS
//! - `routes`: Endpoint registration
//! - `service`: Chat service, prompt templates and LLM client
//! - `utils`: Configuration loading and startup
//!
//! # Examples
//! ```no_run
//! use std::sync::Arc;
//! use actix_web::{web, App, HttpServer};
//! use helpbot::service::{ChatService, OpenAiClient};
//! use helpbot::utils::AppConfig;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::load("config/app.yml").expect("config");
//!     let llm = OpenAiClient::new(&config.llm).expect("client");
//!     let service = web::Data::new(ChatService::new(Arc::new(llm), "ko"));
//!
//!     HttpServer::new(move || {
//!         App::new().app_data(service.clone()).configure(helpbot::routes::configure)
//!     })
//!     .bind("127.0.0.1:8000")?
//!     .run()
//!     .await
//! }
//! ```

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "ko");

pub mod controller;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
