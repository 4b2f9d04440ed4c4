use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use restockr_auth::Role;
use restockr_store::{Invite, InviteStatus};

use crate::app::routes::common;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/prices", get(get_prices).post(submit_price))
        .route("/invite", post(create_invite))
}

const PRICE_ROLES: &[Role] = &[Role::Distributor, Role::Founder];
const INVITE_ROLES: &[Role] = &[Role::Buyer, Role::Founder];

/// Current-week price rows for the demo distributor.
pub async fn get_prices(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, PRICE_ROLES) {
        return resp;
    }

    let distributor = match services.prices.distributor(services.seed.distributor_id) {
        Some(d) => d,
        None => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "distributor not found");
        }
    };
    let items = services
        .prices
        .prices_for_distributor(distributor.id);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "distributor": {
                "id": distributor.id.to_string(),
                "name": distributor.name,
                "region": distributor.region,
            },
            "items": items,
        })),
    )
        .into_response()
}

/// Record a weekly price submission; the row flips to on-time.
pub async fn submit_price(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::SubmitPriceRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, PRICE_ROLES) {
        return resp;
    }

    let item = match services.prices.submit_price(
        services.seed.distributor_id,
        &body.sku,
        body.price_cents,
        Utc::now(),
    ) {
        Ok(item) => item,
        Err(e) => return errors::store_error_to_response(e),
    };

    services.ledger.append(
        "price.submitted",
        serde_json::json!({
            "sku": item.sku,
            "priceCents": body.price_cents,
        }),
    );
    tracing::info!(sku = %item.sku, price_cents = body.price_cents, "weekly price submitted");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "item": item,
        })),
    )
        .into_response()
}

/// Create a distributor invite and hand back its token.
pub async fn create_invite(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::CreateInviteRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::ensure_role(&principal, INVITE_ROLES) {
        return resp;
    }

    let name = body.name.trim();
    let email = body.email.trim();
    if name.is_empty() || email.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "Name and email are required",
        );
    }

    let token = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    );
    let invite = Invite {
        token: token.clone(),
        tenant_id: tenant.tenant_id(),
        name: name.to_string(),
        email: email.to_string(),
        status: InviteStatus::Pending,
        created_at: Utc::now(),
        accepted_at: None,
    };
    services.invites.create(invite);

    services.ledger.append(
        "invite.created",
        serde_json::json!({ "name": name, "email": email }),
    );
    tracing::info!(email, "distributor invite created");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "token": token,
            "message": "Distributor invite created. Share the token with the distributor to onboard.",
        })),
    )
        .into_response()
}
