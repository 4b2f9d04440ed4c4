use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use restockr_ledger::DEFAULT_RECENT_LIMIT;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/log", post(log_event))
        .route("/ledger", get(read_ledger))
}

/// Append one event to the Mintsy ledger.
pub async fn log_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::MintsyLogRequest>,
) -> axum::response::Response {
    let event_type = body.event_type.trim();
    if event_type.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "eventType is required",
        );
    }

    let entry = services
        .ledger
        .append(event_type, body.payload.unwrap_or(serde_json::Value::Null));

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "entry": entry,
        })),
    )
        .into_response()
}

/// Most recent ledger entries, newest first.
///
/// A missing, non-numeric, or non-positive `limit` falls back to the
/// default rather than erroring.
pub async fn read_ledger(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::LedgerQuery>,
) -> impl IntoResponse {
    let limit = query
        .limit
        .as_deref()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_RECENT_LIMIT);

    let entries = services.ledger.recent(limit);
    let count = entries.len();

    Json(serde_json::json!({
        "entries": entries,
        "count": count,
    }))
}
