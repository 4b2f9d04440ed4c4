use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use restockr_bud::respond;

use crate::app::{dto, services::AppServices};

/// Rule-based Bud chat. The body may override the role (the portals let a
/// founder ask "as a buyer"); it defaults to the caller's own role.
pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::BudChatRequest>,
) -> axum::response::Response {
    let role = body.role.unwrap_or_else(|| principal.role());
    let location_name = body
        .location_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("this restaurant");
    let question = body.question.as_deref().unwrap_or("");

    let reply = respond(role, location_name, question);

    services.ledger.append(
        "bud.chat",
        serde_json::json!({
            "role": role,
            "question": question,
        }),
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "role": role,
            "locationName": location_name,
            "answer": reply.answer,
            "suggestions": reply.suggestions,
        })),
    )
        .into_response()
}
