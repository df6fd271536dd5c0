//! Extractors whose rejections answer with an [`ErrorDetails`] body.
//!
//! [`ErrorDetails`]: registry::ErrorDetails

use axum::extract::{FromRequest, FromRequestParts};

use crate::ApiError;

/// `axum::Json` that rejects malformed bodies through [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` that rejects bad segments through [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
