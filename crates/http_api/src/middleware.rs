use axum::{
    body::Body,
    extract::State,
    http::{Request, header::ORIGIN},
    middleware::Next,
    response::Response,
};

use crate::{errors::HttpError, state::HttpState};

pub const TOKEN_HEADER: &str = "x-ctc-token";
pub const OWNER_HEADER: &str = "x-owner-id";

/// Identity resolved by the caller's auth layer, scoped per request.
#[derive(Clone, Debug)]
pub struct OwnerId(pub String);

pub async fn require_identity(
    State(state): State<HttpState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    if let Some(origin) = req.headers().get(ORIGIN) {
        let origin = origin
            .to_str()
            .map_err(|_| HttpError::bad_request("invalid_origin", "invalid Origin header"))?;
        if !is_loopback_origin(origin) {
            return Err(HttpError::forbidden("invalid_origin", "invalid origin"));
        }
    }

    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if token != Some(state.api_token.as_str()) {
        return Err(HttpError::unauthorized("token_invalid", "missing or invalid API token"));
    }

    let owner = req
        .headers()
        .get(OWNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| HttpError::unauthorized("owner_missing", "missing owner id"))?;

    tracing::debug!(method = %req.method(), path = %req.uri().path(), owner = %owner, "api request");
    req.extensions_mut().insert(OwnerId(owner));
    Ok(next.run(req).await)
}

fn is_loopback_origin(origin: &str) -> bool {
    origin.starts_with("http://127.0.0.1:")
        || origin.starts_with("http://localhost:")
        || origin.starts_with("http://[::1]:")
        || origin.starts_with("https://127.0.0.1:")
        || origin.starts_with("https://localhost:")
        || origin.starts_with("https://[::1]:")
}
