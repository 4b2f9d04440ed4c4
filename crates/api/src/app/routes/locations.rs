use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use restockr_auth::Role;

use crate::app::{dto, services::AppServices};

/// Locations visible to the caller.
///
/// Buyers are scoped to their linked locations; auto-created demo buyers
/// have no links and fall back to the full tenant list. Other roles always
/// see every tenant location.
pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
) -> impl IntoResponse {
    let mut visible = match principal.role() {
        Role::Buyer => services
            .locations
            .locations_for_buyer(tenant.tenant_id(), principal.user_id()),
        _ => vec![],
    };
    if visible.is_empty() {
        visible = services.locations.list(tenant.tenant_id());
    }

    let locations: Vec<serde_json::Value> = visible.iter().map(dto::location_to_json).collect();

    Json(serde_json::json!({ "locations": locations }))
}
