use axum::extract::FromRequest;

use crate::errors::HttpError;

/// `Json` body extractor whose rejections use the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);
