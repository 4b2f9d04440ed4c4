use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use restockr_auth::Role;
use restockr_ordering::compute_readiness;

use crate::app::routes::common;
use crate::app::{dto, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/summary", get(summary))
}

/// Store-backed readiness summary for one location.
///
/// Reads the location's most recent order lines and the distributor's
/// current-week price rows, then runs the readiness aggregator. Nothing is
/// cached: edits made through the buyer and distributor portals show up on
/// the next call.
pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Query(query): Query<dto::LocationQuery>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, &[Role::Founder]) {
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
    let prices = services
        .prices
        .prices_for_distributor(services.seed.distributor_id);

    let readiness = compute_readiness(&lines, &prices);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "timeMode": "sunday",
            "scenarioMode": "normal",
            "readinessLabel": readiness.readiness_label,
            "itemsNeedingOrder": readiness.items_needing_order,
            "missingPrices": readiness.missing_prices,
            "needsUpdatePrices": readiness.needs_update_prices,
            "budActions": readiness.advisories,
        })),
    )
        .into_response()
}
