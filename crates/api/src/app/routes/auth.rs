use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};

use restockr_auth::{Role, Session, SessionToken};
use restockr_store::stores::find_or_create_user;

use crate::app::{errors, services::AppServices};

/// Demo login: the email alone authenticates. Unknown emails auto-create a
/// buyer in the demo tenant, mirroring the original onboarding shortcut.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::LoginRequest>,
) -> axum::response::Response {
    let email = body.email.trim();
    if email.is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "Email is required");
    }

    let user = find_or_create_user(
        services.users.as_ref(),
        services.seed.tenant_id,
        email,
        email,
        Role::Buyer,
    );

    let now = Utc::now();
    let session = Session {
        token: SessionToken::generate(),
        user_id: user.id,
        tenant_id: user.tenant_id,
        role: user.role,
        issued_at: now,
        expires_at: now + Duration::hours(services.session_ttl_hours),
    };
    services.sessions.insert(session.clone());

    tracing::info!(user_id = %user.id, role = %user.role, "login");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "role": user.role,
            "token": session.token.as_str(),
        })),
    )
        .into_response()
}

/// Revoke the bearer session presented with this request.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(token): Extension<SessionToken>,
) -> impl IntoResponse {
    services.sessions.revoke(&token);

    Json(serde_json::json!({
        "success": true,
        "message": "Logged out",
    }))
}
