// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::{error, warn};

/// Maps errors raised by the middleware stack to HTTP responses.
/// The text body ends up in the envelope's `messages` via the response wrapper.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(&*err) {
        warn!("Request body too large: {}", e);
        return (StatusCode::PAYLOAD_TOO_LARGE, format!("Request body too large: {}", e));
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        return (StatusCode::REQUEST_TIMEOUT, format!("Request timeout: {}", err));
    }

    // Otherwise, 500
    error!("Unhandled internal error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Unhandled internal error: {}", err))
}

/// Finds a specific error type in the error chain, the error itself included
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut source: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
