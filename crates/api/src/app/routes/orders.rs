use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use restockr_auth::Role;
use restockr_core::OrderId;
use restockr_ordering::{compute_buyer_checklist, parse_transcript};

use crate::app::routes::common;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/today", get(today))
        .route("/update", post(update))
        .route("/voice", post(voice))
        .route("/checklist", get(checklist))
}

const ORDER_ROLES: &[Role] = &[Role::Buyer, Role::Founder];

/// The most recent order for a location (header + lines).
pub async fn today(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Query(query): Query<dto::LocationQuery>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, ORDER_ROLES) {
        return resp;
    }

    let location = match common::resolve_location(&services, &tenant, query.location_id.as_deref())
    {
        Ok(l) => l,
        Err(resp) => return resp,
    };

    let order = match services.orders.latest_for_location(location.id) {
        Some(o) => o,
        None => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                "no order for this location",
            );
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "location": dto::location_to_json(&location),
            "order": {
                "id": order.id.to_string(),
                "status": order.status,
                "createdAt": order.created_at,
            },
            "lines": order.lines,
        })),
    )
        .into_response()
}

/// Overwrite on-hand counts for lines of an existing order.
pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::UpdateOrderRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, ORDER_ROLES) {
        return resp;
    }

    let order_id: OrderId = match body.order_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id");
        }
    };

    let mut order = match services.orders.get(order_id) {
        Some(o) => o,
        None => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Order not found"),
    };

    // Orders are reachable only through the caller's tenant locations.
    let tenant_locations = services.locations.list(tenant.tenant_id());
    if !tenant_locations.iter().any(|l| l.id == order.location_id) {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Order not found");
    }

    let mut updated = 0usize;
    for line in &body.lines {
        let on_hand = line.on_hand.filter(|v| v.is_finite()).unwrap_or(0.0);
        if order.set_on_hand(&line.sku, on_hand) {
            updated += 1;
        }
    }
    services.orders.put(order);

    services.ledger.append(
        "order.updated",
        serde_json::json!({
            "orderId": body.order_id,
            "linesUpdated": updated,
        }),
    );
    tracing::info!(order_id = %body.order_id, updated, "order lines updated");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "Order lines updated successfully.",
        })),
    )
        .into_response()
}

/// Parse a dictated transcript into order-line suggestions.
pub async fn voice(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::VoiceOrderRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, ORDER_ROLES) {
        return resp;
    }

    let location = match common::resolve_location(&services, &tenant, body.location_id.as_deref())
    {
        Ok(l) => l,
        Err(resp) => return resp,
    };

    let known_lines = services
        .orders
        .latest_for_location(location.id)
        .map(|o| o.lines)
        .unwrap_or_default();

    let suggestions = parse_transcript(&body.transcript, &known_lines);
    let count = suggestions.len();

    // An empty list means "nothing recognized", not an error.
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "suggestions": suggestions,
            "count": count,
        })),
    )
        .into_response()
}

/// Pre-send checklist for the location's most recent order.
pub async fn checklist(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Query(query): Query<dto::LocationQuery>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, ORDER_ROLES) {
        return resp;
    }

    let location = match common::resolve_location(&services, &tenant, query.location_id.as_deref())
    {
        Ok(l) => l,
        Err(resp) => return resp,
    };

    let lines = services
        .orders
        .latest_for_location(location.id)
        .map(|o| o.lines)
        .unwrap_or_default();

    (StatusCode::OK, Json(compute_buyer_checklist(&lines))).into_response()
}
