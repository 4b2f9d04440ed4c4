use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use restockr_auth::Role;
use restockr_core::DistributorId;
use restockr_store::{Distributor, InviteStatus, stores::find_or_create_user};

use crate::app::{dto, errors, services::AppServices};

/// Look up an invite by token (pre-login, used by the onboarding page).
pub async fn verify_invite(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::InviteQuery>,
) -> axum::response::Response {
    let invite = match services.invites.find_by_token(&query.token) {
        Some(i) => i,
        None => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Invite not found"),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "token": invite.token,
            "name": invite.name,
            "email": invite.email,
            "createdAt": invite.created_at,
            "status": invite.status,
        })),
    )
        .into_response()
}

/// Accept a pending invite: create/link the distributor user and record,
/// then mark the invite accepted.
pub async fn onboard_distributor(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::OnboardRequest>,
) -> axum::response::Response {
    let token = body.token.trim();
    if token.is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "Token is required");
    }

    let invite = match services.invites.find_by_token(token) {
        Some(i) => i,
        None => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Invite not found"),
    };

    if invite.status != InviteStatus::Pending {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invite_not_pending",
            "Invite is not pending",
        );
    }

    let display_name = body
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let user = find_or_create_user(
        services.users.as_ref(),
        invite.tenant_id,
        &invite.email,
        display_name.unwrap_or(&invite.name),
        Role::Distributor,
    );

    match services
        .prices
        .distributor_by_email(invite.tenant_id, &invite.email)
    {
        Some(mut distributor) => {
            if distributor.user_id.is_none() {
                distributor.user_id = Some(user.id);
                services.prices.put_distributor(distributor);
            }
        }
        None => {
            services.prices.put_distributor(Distributor {
                id: DistributorId::new(),
                tenant_id: invite.tenant_id,
                name: invite.name.clone(),
                email: invite.email.clone(),
                region: "Unknown".to_string(),
                user_id: Some(user.id),
            });
        }
    }

    if let Err(e) = services.invites.mark_accepted(token, Utc::now()) {
        return errors::store_error_to_response(e);
    }

    services.ledger.append(
        "distributor.onboarded",
        serde_json::json!({ "email": invite.email }),
    );
    tracing::info!(email = %invite.email, "distributor onboarded from invite");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "email": invite.email,
            "message": "Distributor account created/linked. You can now log in using this email.",
        })),
    )
        .into_response()
}
