//! Request extractors whose rejections use the API's JSON error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections turned into [`AppError::JsonBody`], so a
/// malformed body gets a 400 `{error, code}` response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
