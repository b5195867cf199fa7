//! Request extractors that reject with the API error body
//!
//! Axum's own `Json` and `Query` rejections answer in plain text. These
//! wrappers route them through `ApiError` so every client error carries
//! `{error: {code, message}}`.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
