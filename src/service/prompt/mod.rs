//! 프롬프트 템플릿
//!
//! Two fixed templates live for the whole process: the Helpbot persona used for
//! `/chatbot/ask`, and the repair-request summarizer used for `/chatbot/summarize`.
//! Each binds exactly one variable into its user message.
//!
//! # 예시
//! ```rust
//! use helpbot::service::prompt::render_chat_prompt;
//!
//! let prompt = render_chat_prompt("타이어가 펑크났어요");
//! assert_eq!(prompt.user_content(), Some("타이어가 펑크났어요"));
//! ```

use crate::entities::RenderedPrompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub system_instruction: &'static str,
    pub variable_name: &'static str,
    /// User message body; `{<variable_name>}` is replaced on render.
    pub user_template: &'static str,
}

impl PromptTemplate {
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.variable_name)
    }

    pub fn render(&self, value: &str) -> RenderedPrompt {
        let user = self.user_template.replace(&self.placeholder(), value);
        RenderedPrompt::system_and_user(self.system_instruction, user)
    }
}

pub const CHAT_TEMPLATE: PromptTemplate = PromptTemplate {
    system_instruction: "You are a helpful assistant for the 'CAR PARTER' service, \
specializing in used car parts. Your name is 'Helpbot'. \
Answer questions concisely and friendly in Korean.",
    variable_name: "question",
    user_template: "{question}",
};

pub const SUMMARY_TEMPLATE: PromptTemplate = PromptTemplate {
    system_instruction: r#"당신은 'CAR PARTER' 서비스의 수리 요청서 작성 도우미입니다.
고객과 챗봇이 나눈 대화를 읽고, 정비소에 전달할 수리 요청서를 작성하세요.
인사말이나 잡담은 모두 제외하고, 차량 문제와 관련된 내용만 다루세요.

반드시 아래 형식을 따르고, 각 항목은 글머리 기호(-) 목록으로 작성하세요.

### 주요 증상
- (고객이 설명한 차량의 증상)

### 발생 시점 및 상황
- (증상이 처음 나타난 시점, 주행 조건 등 상황)

### 고객 요청 사항
- (고객이 원하는 조치나 요청)

고객 요청 사항이 없다면 해당 항목은 생략하세요."#,
    variable_name: "conversation_text",
    user_template: "다음 대화 내용을 수리 요청서로 요약해주세요.\n\n[대화 내용]\n{conversation_text}",
};

pub fn render_chat_prompt(message: &str) -> RenderedPrompt {
    CHAT_TEMPLATE.render(message)
}

pub fn render_summary_prompt(transcript: &str) -> RenderedPrompt {
    SUMMARY_TEMPLATE.render(transcript)
}
