use std::sync::Arc;

use axum::http::StatusCode;

use restockr_auth::{Role, require_role};
use restockr_store::Location;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::{PrincipalContext, TenantContext};

/// Location slug used when a portal omits `locationId` (the downtown demo).
pub const DEFAULT_LOCATION_SLUG: &str = "loc-demo-1";

/// Enforce a route's allowed role set, producing the standard 403 body.
pub fn ensure_role(
    principal: &PrincipalContext,
    allowed: &[Role],
) -> Result<(), axum::response::Response> {
    require_role(principal.role(), allowed)
        .map_err(|e| errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string()))
}

/// Resolve the location for an optional `locationId` query value.
pub fn resolve_location(
    services: &Arc<AppServices>,
    tenant: &TenantContext,
    slug: Option<&str>,
) -> Result<Location, axum::response::Response> {
    let slug = slug.unwrap_or(DEFAULT_LOCATION_SLUG);
    services
        .locations
        .find_by_slug(tenant.tenant_id(), slug)
        .ok_or_else(|| errors::json_error(StatusCode::NOT_FOUND, "not_found", "location not found"))
}
