//! Extractors whose rejections render as `JsonApiError`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

/// `axum::Json` with malformed or missing bodies reported as 400 `{"msg": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with the same error shape.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct IdPath<T>(pub T);
