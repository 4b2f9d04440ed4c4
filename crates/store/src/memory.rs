//! In-memory implementation of every repository seam.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use restockr_auth::{Session, SessionToken};
use restockr_core::{DistributorId, LocationId, OrderId, TenantId, UserId};
use restockr_ordering::{Order, PriceEntry};

use crate::error::StoreError;
use crate::records::{BuyerLocation, Distributor, Invite, InviteStatus, Location, User};
use crate::stores::{InviteStore, LocationStore, OrderStore, PriceStore, SessionStore, UserStore};

/// Lock-backed store for tests/dev and the demo deployment.
///
/// One struct implements all repository traits so a single `Arc` can be
/// coerced into each seam at wiring time.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    sessions: RwLock<HashMap<String, Session>>,
    locations: RwLock<Vec<Location>>,
    buyer_locations: RwLock<Vec<BuyerLocation>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    distributors: RwLock<HashMap<DistributorId, Distributor>>,
    prices: RwLock<HashMap<DistributorId, Vec<PriceEntry>>>,
    invites: RwLock<HashMap<String, Invite>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryStore {
    fn get(&self, id: UserId) -> Option<User> {
        self.users.read().ok()?.get(&id).cloned()
    }

    fn find_by_email(&self, tenant_id: TenantId, email: &str) -> Option<User> {
        let users = self.users.read().ok()?;
        users
            .values()
            .find(|u| u.tenant_id == tenant_id && u.email == email)
            .cloned()
    }

    fn put(&self, user: User) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.id, user);
        }
    }
}

impl SessionStore for InMemoryStore {
    fn insert(&self, session: Session) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(session.token.as_str().to_string(), session);
        }
    }

    fn get(&self, token: &SessionToken) -> Option<Session> {
        self.sessions.read().ok()?.get(token.as_str()).cloned()
    }

    fn revoke(&self, token: &SessionToken) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token.as_str());
        }
    }
}

impl LocationStore for InMemoryStore {
    fn list(&self, tenant_id: TenantId) -> Vec<Location> {
        let locations = match self.locations.read() {
            Ok(l) => l,
            Err(_) => return vec![],
        };
        locations
            .iter()
            .filter(|l| l.tenant_id == tenant_id)
            .cloned()
            .collect()
    }

    fn find_by_slug(&self, tenant_id: TenantId, slug: &str) -> Option<Location> {
        let locations = self.locations.read().ok()?;
        locations
            .iter()
            .find(|l| l.tenant_id == tenant_id && l.slug == slug)
            .cloned()
    }

    fn put(&self, location: Location) {
        if let Ok(mut locations) = self.locations.write() {
            match locations.iter_mut().find(|l| l.id == location.id) {
                Some(existing) => *existing = location,
                None => locations.push(location),
            }
        }
    }

    fn link_buyer(&self, link: BuyerLocation) {
        if let Ok(mut links) = self.buyer_locations.write() {
            if !links.contains(&link) {
                links.push(link);
            }
        }
    }

    fn locations_for_buyer(&self, tenant_id: TenantId, user_id: UserId) -> Vec<Location> {
        let links = match self.buyer_locations.read() {
            Ok(l) => l,
            Err(_) => return vec![],
        };
        self.list(tenant_id)
            .into_iter()
            .filter(|loc| {
                links
                    .iter()
                    .any(|link| link.user_id == user_id && link.location_id == loc.id)
            })
            .collect()
    }
}

impl OrderStore for InMemoryStore {
    fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.read().ok()?.get(&id).cloned()
    }

    fn latest_for_location(&self, location_id: LocationId) -> Option<Order> {
        let orders = self.orders.read().ok()?;
        orders
            .values()
            .filter(|o| o.location_id == location_id)
            .max_by_key(|o| o.created_at)
            .cloned()
    }

    fn put(&self, order: Order) {
        if let Ok(mut orders) = self.orders.write() {
            orders.insert(order.id, order);
        }
    }
}

impl PriceStore for InMemoryStore {
    fn distributor(&self, id: DistributorId) -> Option<Distributor> {
        self.distributors.read().ok()?.get(&id).cloned()
    }

    fn distributor_by_email(&self, tenant_id: TenantId, email: &str) -> Option<Distributor> {
        let distributors = self.distributors.read().ok()?;
        distributors
            .values()
            .find(|d| d.tenant_id == tenant_id && d.email == email)
            .cloned()
    }

    fn put_distributor(&self, distributor: Distributor) {
        if let Ok(mut distributors) = self.distributors.write() {
            distributors.insert(distributor.id, distributor);
        }
    }

    fn prices_for_distributor(&self, id: DistributorId) -> Vec<PriceEntry> {
        self.prices
            .read()
            .ok()
            .and_then(|p| p.get(&id).cloned())
            .unwrap_or_default()
    }

    fn put_prices(&self, id: DistributorId, prices: Vec<PriceEntry>) {
        if let Ok(mut all) = self.prices.write() {
            all.insert(id, prices);
        }
    }

    fn submit_price(
        &self,
        id: DistributorId,
        sku: &str,
        price_cents: u64,
        submitted_at: DateTime<Utc>,
    ) -> Result<PriceEntry, StoreError> {
        let mut all = self.prices.write().map_err(|_| StoreError::NotFound)?;
        let rows = all.get_mut(&id).ok_or(StoreError::NotFound)?;
        let row = rows
            .iter_mut()
            .find(|r| r.sku == sku)
            .ok_or(StoreError::NotFound)?;

        row.submit(price_cents, submitted_at);
        Ok(row.clone())
    }
}

impl InviteStore for InMemoryStore {
    fn create(&self, invite: Invite) {
        if let Ok(mut invites) = self.invites.write() {
            invites.insert(invite.token.clone(), invite);
        }
    }

    fn find_by_token(&self, token: &str) -> Option<Invite> {
        self.invites.read().ok()?.get(token).cloned()
    }

    fn mark_accepted(&self, token: &str, accepted_at: DateTime<Utc>) -> Result<Invite, StoreError> {
        let mut invites = self.invites.write().map_err(|_| StoreError::NotFound)?;
        let invite = invites.get_mut(token).ok_or(StoreError::NotFound)?;

        if invite.status != InviteStatus::Pending {
            return Err(StoreError::Conflict("invite is not pending".to_string()));
        }

        invite.status = InviteStatus::Accepted;
        invite.accepted_at = Some(accepted_at);
        Ok(invite.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restockr_auth::Role;
    use restockr_ordering::{OrderLine, OrderStatus};

    fn demo_order(location_id: LocationId, created_at: DateTime<Utc>) -> Order {
        Order {
            id: OrderId::new(),
            location_id,
            status: OrderStatus::Submitted,
            created_at,
            lines: vec![OrderLine {
                sku: "AVO-48".to_string(),
                name: "Avocados 48ct".to_string(),
                par: 4.0,
                on_hand: 1.5,
                unit: "cases".to_string(),
            }],
        }
    }

    #[test]
    fn latest_order_wins_by_created_at() {
        let store = InMemoryStore::new();
        let location_id = LocationId::new();
        let now = Utc::now();

        let older = demo_order(location_id, now - chrono::Duration::days(1));
        let newer = demo_order(location_id, now);
        OrderStore::put(&store, older);
        OrderStore::put(&store, newer.clone());

        assert_eq!(store.latest_for_location(location_id).unwrap().id, newer.id);
    }

    #[test]
    fn user_email_lookup_is_tenant_scoped() {
        let store = InMemoryStore::new();
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();
        UserStore::put(
            &store,
            User {
                id: UserId::new(),
                tenant_id: tenant_a,
                email: "buyer1@demo.com".to_string(),
                name: "Buyer One".to_string(),
                role: Role::Buyer,
            },
        );

        assert!(store.find_by_email(tenant_a, "buyer1@demo.com").is_some());
        assert!(store.find_by_email(tenant_b, "buyer1@demo.com").is_none());
    }

    #[test]
    fn submitting_a_price_for_an_unknown_sku_is_not_found() {
        let store = InMemoryStore::new();
        let distributor_id = DistributorId::new();
        store.put_prices(distributor_id, vec![PriceEntry::missing("LETT-MIX")]);

        let err = store
            .submit_price(distributor_id, "CAVIAR-1", 9900, Utc::now())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn accepting_an_invite_twice_conflicts() {
        let store = InMemoryStore::new();
        let now = Utc::now();
        store.create(Invite {
            token: "tok".to_string(),
            tenant_id: TenantId::new(),
            name: "Desert Greens Supply".to_string(),
            email: "sales@desertgreens.com".to_string(),
            status: InviteStatus::Pending,
            created_at: now,
            accepted_at: None,
        });

        assert!(store.mark_accepted("tok", now).is_ok());
        assert!(matches!(
            store.mark_accepted("tok", now),
            Err(StoreError::Conflict(_))
        ));
    }

    #[test]
    fn buyer_location_links_scope_the_listing() {
        let store = InMemoryStore::new();
        let tenant_id = TenantId::new();
        let buyer_id = UserId::new();
        let downtown = LocationId::new();
        let uptown = LocationId::new();

        for (id, slug) in [(downtown, "loc-demo-1"), (uptown, "loc-demo-2")] {
            LocationStore::put(
                &store,
                Location {
                    id,
                    tenant_id,
                    slug: slug.to_string(),
                    name: slug.to_string(),
                    city: None,
                    region: None,
                },
            );
        }

        assert!(store.locations_for_buyer(tenant_id, buyer_id).is_empty());

        store.link_buyer(BuyerLocation {
            user_id: buyer_id,
            location_id: downtown,
        });
        // Re-linking is a no-op.
        store.link_buyer(BuyerLocation {
            user_id: buyer_id,
            location_id: downtown,
        });

        let linked = store.locations_for_buyer(tenant_id, buyer_id);
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, downtown);
    }

    #[test]
    fn revoked_sessions_disappear() {
        let store = InMemoryStore::new();
        let session = Session {
            token: restockr_auth::SessionToken::generate(),
            user_id: UserId::new(),
            tenant_id: TenantId::new(),
            role: Role::Founder,
            issued_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::hours(8),
        };
        let token = session.token.clone();

        SessionStore::insert(&store, session);
        assert!(SessionStore::get(&store, &token).is_some());
        store.revoke(&token);
        assert!(SessionStore::get(&store, &token).is_none());
    }
}
