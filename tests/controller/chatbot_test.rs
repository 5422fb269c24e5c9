use actix_web::{test, web, App};
use async_trait::async_trait;
use helpbot::entities::RenderedPrompt;
use helpbot::routes::configure;
use helpbot::service::{ChatService, LlmClient, LlmError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Returns a fixed completion and records the prompts it was asked to complete.
struct StubLlm {
    reply: Result<String, String>,
    prompts: Mutex<Vec<RenderedPrompt>>,
}

impl StubLlm {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(text.to_string()), prompts: Mutex::new(Vec::new()) })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { reply: Err("quota exceeded".to_string()), prompts: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().map_err(LlmError::MalformedResponse)
    }
}

fn chat_service(llm: Arc<StubLlm>) -> web::Data<ChatService> {
    web::Data::new(ChatService::new(llm, "ko"))
}

#[actix_web::test]
async fn test_ask_returns_llm_reply() {
    let llm = StubLlm::replying("확인했습니다");
    let app = test::init_service(
        App::new().app_data(chat_service(llm.clone())).configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chatbot/ask")
        .set_json(json!({ "message": "타이어가 펑크났어요" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "reply": "확인했습니다" }));

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].user_content(), Some("타이어가 펑크났어요"));
}

#[actix_web::test]
async fn test_summarize_returns_llm_summary() {
    let summary = "### 주요 증상\n- 브레이크에서 소음 발생";
    let llm = StubLlm::replying(summary);
    let app = test::init_service(
        App::new().app_data(chat_service(llm.clone())).configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chatbot/summarize")
        .set_json(json!({
            "messages": [
                { "type": "user", "message": "브레이크에서 소리가 나요" },
                { "type": "bot", "message": "언제부터 그러셨나요?" }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "summary": summary }));

    let prompts = llm.prompts.lock().unwrap();
    let user = prompts[0].user_content().unwrap();
    assert!(user.ends_with("user: 브레이크에서 소리가 나요\nbot: 언제부터 그러셨나요?"));
}

#[actix_web::test]
async fn test_provider_failure_still_returns_ok() {
    let app = test::init_service(
        App::new().app_data(chat_service(StubLlm::failing())).configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chatbot/ask")
        .set_json(json!({ "message": "안녕하세요" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reply"], "죄송합니다, 답변을 생성하는 중에 오류가 발생했습니다.");

    let req = test::TestRequest::post()
        .uri("/chatbot/summarize")
        .set_json(json!({ "messages": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"], "죄송합니다, 대화 내용을 요약하는 중에 오류가 발생했습니다.");
}

#[actix_web::test]
async fn test_blank_message_is_rejected() {
    let llm = StubLlm::replying("unused");
    let app = test::init_service(
        App::new().app_data(chat_service(llm.clone())).configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chatbot/ask")
        .set_json(json!({ "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["data"]["field"], "message");
    assert!(llm.prompts.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_malformed_bodies_are_rejected() {
    let app = test::init_service(
        App::new().app_data(chat_service(StubLlm::replying("unused"))).configure(configure),
    )
    .await;

    let cases = [
        ("/chatbot/ask", json!({ "msg": "hi" })),
        ("/chatbot/summarize", json!({ "messages": [{ "type": "admin", "message": "hi" }] })),
        ("/chatbot/summarize", json!({ "messages": "hi" })),
    ];
    for (uri, payload) in cases {
        let req = test::TestRequest::post().uri(uri).set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri} accepted {payload}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["field"], "body");
    }
}

#[actix_web::test]
async fn test_welcome() {
    let app = test::init_service(
        App::new().app_data(chat_service(StubLlm::replying("unused"))).configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["message"].as_str().is_some_and(|m| m.contains("Helpbot API")));
}

#[actix_web::test]
async fn test_served_over_http() {
    let data = chat_service(StubLlm::replying("확인했습니다"));
    let srv = actix_test::start(move || {
        App::new()
            .app_data(data.clone())
            .wrap(helpbot::middleware::Logging)
            .configure(configure)
    });

    let mut resp = srv
        .post("/chatbot/ask")
        .send_json(&json!({ "message": "타이어가 펑크났어요" }))
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reply"], "확인했습니다");
}
