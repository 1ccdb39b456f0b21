use crate::search::SearchError;
use crate::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::Json;

pub type HandlerError = (StatusCode, Json<ErrorResponse>);

pub fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            kind: None,
        }),
    )
}

/// Upstream failures are reported as 502 with the failure class attached.
pub fn upstream_error(context: &str, e: &SearchError) -> HandlerError {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: format!("{}: {}", context, e),
            kind: Some(e.kind().as_str().to_string()),
        }),
    )
}
