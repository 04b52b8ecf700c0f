//! Request extractors whose rejections go through [`AppError`].
//!
//! axum's stock `Json` and `Path` reject with plain-text 422/400 bodies.
//! These wrappers route malformed bodies and path segments into the same
//! `{error, code}` shape as every other validation failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A missing field, a wrong type, or unparseable JSON is
/// a 400 `VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. `/venues/abc`) is a
/// 400 `VALIDATION_ERROR`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
