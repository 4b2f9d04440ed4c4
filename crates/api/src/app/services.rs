use std::sync::Arc;

use restockr_ledger::{InMemoryLedger, LedgerStore};
use restockr_store::{
    DemoSeed, InMemoryStore, InviteStore, LocationStore, OrderStore, PriceStore, SessionStore,
    UserStore, seed_demo,
};

/// Default session lifetime, overridable via `RESTOCKR_SESSION_TTL_HOURS`.
const DEFAULT_SESSION_TTL_HOURS: i64 = 8;

/// Wired application services.
///
/// Every repository is held behind its trait seam; in the demo they all
/// point at one seeded [`InMemoryStore`].
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub locations: Arc<dyn LocationStore>,
    pub orders: Arc<dyn OrderStore>,
    pub prices: Arc<dyn PriceStore>,
    pub invites: Arc<dyn InviteStore>,
    pub ledger: Arc<dyn LedgerStore>,
    pub seed: DemoSeed,
    pub session_ttl_hours: i64,
}

/// Build the in-memory service graph and seed the demo tenant.
pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryStore::new());
    let seed = seed_demo(&store);

    let session_ttl_hours = std::env::var("RESTOCKR_SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|h| *h > 0)
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

    tracing::info!(
        tenant_id = %seed.tenant_id,
        "seeded demo tenant with two locations and one distributor"
    );

    AppServices {
        users: store.clone(),
        sessions: store.clone(),
        locations: store.clone(),
        orders: store.clone(),
        prices: store.clone(),
        invites: store.clone(),
        ledger: Arc::new(InMemoryLedger::new()),
        seed,
        session_ttl_hours,
    }
}
