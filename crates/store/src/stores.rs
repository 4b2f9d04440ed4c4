//! Repository seams.
//!
//! One small trait per concern, so routes depend on the operation they need
//! and tests can swap implementations. All methods are synchronous: the demo
//! store is lock-backed memory with no IO.

use chrono::{DateTime, Utc};

use restockr_auth::{Role, Session, SessionToken};
use restockr_core::{DistributorId, LocationId, OrderId, TenantId, UserId};
use restockr_ordering::{Order, PriceEntry};

use crate::error::StoreError;
use crate::records::{BuyerLocation, Distributor, Invite, Location, User};

pub trait UserStore: Send + Sync {
    fn get(&self, id: UserId) -> Option<User>;
    fn find_by_email(&self, tenant_id: TenantId, email: &str) -> Option<User>;
    fn put(&self, user: User);
}

pub trait SessionStore: Send + Sync {
    fn insert(&self, session: Session);
    fn get(&self, token: &SessionToken) -> Option<Session>;
    fn revoke(&self, token: &SessionToken);
}

pub trait LocationStore: Send + Sync {
    fn list(&self, tenant_id: TenantId) -> Vec<Location>;
    fn find_by_slug(&self, tenant_id: TenantId, slug: &str) -> Option<Location>;
    fn put(&self, location: Location);
    fn link_buyer(&self, link: BuyerLocation);
    /// Locations linked to a buyer, in tenant list order. Empty when the
    /// buyer has no links.
    fn locations_for_buyer(&self, tenant_id: TenantId, user_id: UserId) -> Vec<Location>;
}

pub trait OrderStore: Send + Sync {
    fn get(&self, id: OrderId) -> Option<Order>;
    /// The most recent order for a location, if any.
    fn latest_for_location(&self, location_id: LocationId) -> Option<Order>;
    fn put(&self, order: Order);
}

pub trait PriceStore: Send + Sync {
    fn distributor(&self, id: DistributorId) -> Option<Distributor>;
    fn distributor_by_email(&self, tenant_id: TenantId, email: &str) -> Option<Distributor>;
    fn put_distributor(&self, distributor: Distributor);
    /// Current-week price rows for a distributor (seed order preserved).
    fn prices_for_distributor(&self, id: DistributorId) -> Vec<PriceEntry>;
    fn put_prices(&self, id: DistributorId, prices: Vec<PriceEntry>);
    /// Record a weekly price submission for one SKU. The row must exist.
    fn submit_price(
        &self,
        id: DistributorId,
        sku: &str,
        price_cents: u64,
        submitted_at: DateTime<Utc>,
    ) -> Result<PriceEntry, StoreError>;
}

pub trait InviteStore: Send + Sync {
    fn create(&self, invite: Invite);
    fn find_by_token(&self, token: &str) -> Option<Invite>;
    /// Flip a pending invite to accepted. Fails if unknown or not pending.
    fn mark_accepted(&self, token: &str, accepted_at: DateTime<Utc>) -> Result<Invite, StoreError>;
}

/// Convenience used by login and onboarding: fetch the user for an email or
/// create one with the given role.
pub fn find_or_create_user(
    users: &dyn UserStore,
    tenant_id: TenantId,
    email: &str,
    name: &str,
    role: Role,
) -> User {
    if let Some(user) = users.find_by_email(tenant_id, email) {
        return user;
    }

    let user = User {
        id: UserId::new(),
        tenant_id,
        email: email.to_string(),
        name: name.to_string(),
        role,
    };
    users.put(user.clone());
    user
}
