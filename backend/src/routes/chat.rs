//! FAQ chat API routes

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::chat::{ChatIntro, ChatRequest, ChatResponse, ChatService};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(ask))
        .route("/quick-questions", get(quick_questions))
}

/// POST /api/v1/chat - Answer an irrigation question
async fn ask(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    ChatService::ask(&state, req).map(Json)
}

/// GET /api/v1/chat/quick-questions - Greeting and suggested questions
async fn quick_questions() -> Json<ChatIntro> {
    Json(ChatService::intro())
}
