//! Serving handler for a write-only backend.

use axum::http::StatusCode;
use axum::Router;

/// Router that answers every request with 404. Content is never served from here;
/// hosts fetch media through the reference routes instead.
pub fn not_found_router() -> Router {
    Router::new().fallback(not_found)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
