//! REST API handlers.
//!
//! One parameterized handler serves all six category endpoints. Each
//! call either fully succeeds (200 with the whole category listing) or
//! fully fails (500); there are no partial results and no server-side
//! retries.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use sustain_core::Category;

use crate::ApiState;

/// Error body returned on store failure.
#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(msg: &str, status: StatusCode) -> Response {
    (
        status,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

/// GET /api/{category} — bare JSON array of that category's records.
pub async fn list_category(State(state): State<ApiState>, category: Category) -> Response {
    match state.store.list_by_category(category) {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!(category = category.as_str(), error = %e, "category listing failed");
            error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
