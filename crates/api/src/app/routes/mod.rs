use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod bud;
pub mod common;
pub mod distributor;
pub mod founder;
pub mod locations;
pub mod mintsy;
pub mod onboard;
pub mod orders;
pub mod system;

/// Router for all authenticated (session-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/auth/logout", post(auth::logout))
        .route("/locations", get(locations::list_locations))
        .nest("/orders", orders::router())
        .nest("/distributor", distributor::router())
        .nest("/founder", founder::router())
        .route("/bud/chat", post(bud::chat))
        .nest("/mintsy", mintsy::router())
}

/// Router for unauthenticated endpoints (login and invite onboarding).
pub fn public_router() -> Router {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/onboard/invite", get(onboard::verify_invite))
        .route("/onboard/distributor", post(onboard::onboard_distributor))
}
