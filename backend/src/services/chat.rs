//! FAQ chat service

use crate::error::ApiResult;
use crate::state::AppState;
use garden_advisor_shared::{GREETING, QUICK_QUESTIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

/// Chat question
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    /// Blank questions are allowed and receive the fallback reply
    #[validate(length(max = 500, message = "Question must be at most 500 characters"))]
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Greeting and suggested questions for an empty chat
#[derive(Debug, Clone, Serialize)]
pub struct ChatIntro {
    pub greeting: &'static str,
    pub questions: Vec<&'static str>,
}

pub struct ChatService;

impl ChatService {
    pub fn ask(state: &AppState, req: ChatRequest) -> ApiResult<ChatResponse> {
        req.validate()?;
        let answer = state.faq().answer(&req.question);
        debug!(question = %req.question, "Answered chat question");
        Ok(ChatResponse {
            answer: answer.to_string(),
        })
    }

    pub fn intro() -> ChatIntro {
        ChatIntro {
            greeting: GREETING,
            questions: QUICK_QUESTIONS.to_vec(),
        }
    }
}
