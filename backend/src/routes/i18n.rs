//! Localization API routes

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::services::i18n::{I18nService, LocaleBundle, LocaleInfo, Translation};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Create localization routes
pub fn i18n_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locales))
        .route("/translate/:key", get(translate_key))
        .route("/:locale", get(locale_bundle))
}

/// GET /api/v1/i18n - Supported locales
async fn list_locales() -> Json<Vec<LocaleInfo>> {
    Json(I18nService::locales())
}

/// GET /api/v1/i18n/:locale - All UI strings for a locale
async fn locale_bundle(Path(locale): Path<String>) -> ApiResult<Json<LocaleBundle>> {
    I18nService::bundle(&locale).map(Json)
}

/// GET /api/v1/i18n/translate/:key?lang= - One UI string
async fn translate_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ApiQuery(query): ApiQuery<LangQuery>,
) -> ApiResult<Json<Translation>> {
    I18nService::translate(&state, &key, query.lang.as_deref()).map(Json)
}
