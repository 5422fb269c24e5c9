use crate::entities::{ChatHistory, ChatQuery};
use crate::error::AppError;
use crate::service::ChatService;
use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": t!("app.welcome") }))
}

/// 사용자 메시지를 받아 챗봇 답변을 반환합니다.
#[post("/ask")]
pub async fn ask(
    service: web::Data<ChatService>,
    req: web::Json<ChatQuery>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!(
        "[{}] Received chat question ({} characters)",
        request_id,
        req.message.chars().count()
    );
    req.validate()?;

    let reply = service.get_reply(&req).await;

    log::info!(
        "[{}] Answered chat question in {}ms",
        request_id,
        (Utc::now() - start_time).num_milliseconds()
    );
    Ok(HttpResponse::Ok().json(reply))
}

/// 전체 채팅 내역을 받아 수리 요청서 요약을 반환합니다.
#[post("/summarize")]
pub async fn summarize(
    service: web::Data<ChatService>,
    req: web::Json<ChatHistory>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!("[{}] Received summary request with {} messages", request_id, req.messages.len());

    let summary = service.summarize(&req).await;

    log::info!(
        "[{}] Summarized conversation in {}ms",
        request_id,
        (Utc::now() - start_time).num_milliseconds()
    );
    HttpResponse::Ok().json(summary)
}

pub fn routes() -> actix_web::Scope {
    web::scope("/chatbot").service(ask).service(summarize)
}
