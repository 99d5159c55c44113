//! Request extractors whose rejections render through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// A JSON request body.
///
/// Same as [`axum::Json`], except that a malformed body, a wrongly typed
/// field or a missing `Content-Type` becomes a JSON `400 BAD_REQUEST`
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
