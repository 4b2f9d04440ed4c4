//! Demo dataset.
//!
//! Recreates the original Restockr seed: one tenant, four users, two Phoenix
//! locations with a most-recent order each, and one distributor with four
//! current-week price rows.

use chrono::Utc;

use restockr_auth::Role;
use restockr_core::{DistributorId, LocationId, OrderId, TenantId, UserId};
use restockr_ordering::{Order, OrderLine, OrderStatus, PriceEntry, PriceStatus};

use crate::memory::InMemoryStore;
use crate::records::{BuyerLocation, Distributor, Location, User};
use crate::stores::{LocationStore, OrderStore, PriceStore, UserStore};

/// Handles into the seeded demo data.
#[derive(Debug, Clone)]
pub struct DemoSeed {
    pub tenant_id: TenantId,
    pub distributor_id: DistributorId,
    pub downtown: LocationId,
    pub uptown: LocationId,
}

fn line(sku: &str, name: &str, par: f64, on_hand: f64, unit: &str) -> OrderLine {
    OrderLine {
        sku: sku.to_string(),
        name: name.to_string(),
        par,
        on_hand,
        unit: unit.to_string(),
    }
}

fn user(tenant_id: TenantId, email: &str, name: &str, role: Role) -> User {
    User {
        id: UserId::new(),
        tenant_id,
        email: email.to_string(),
        name: name.to_string(),
        role,
    }
}

/// Populate `store` with the demo tenant and return handles to it.
pub fn seed_demo(store: &InMemoryStore) -> DemoSeed {
    let tenant_id = TenantId::new();
    let now = Utc::now();

    UserStore::put(store, user(tenant_id, "founder@demo.com", "Demo Founder", Role::Founder));
    let buyer1 = user(tenant_id, "buyer1@demo.com", "Buyer One", Role::Buyer);
    let buyer1_id = buyer1.id;
    UserStore::put(store, buyer1);
    let buyer2 = user(tenant_id, "buyer2@demo.com", "Buyer Two", Role::Buyer);
    let buyer2_id = buyer2.id;
    UserStore::put(store, buyer2);
    let rep = user(tenant_id, "dist@demo.com", "Demo Distributor Rep", Role::Distributor);
    let rep_id = rep.id;
    UserStore::put(store, rep);

    let downtown = LocationId::new();
    let uptown = LocationId::new();

    LocationStore::put(
        store,
        Location {
            id: downtown,
            tenant_id,
            slug: "loc-demo-1".to_string(),
            name: "Phoenix – Downtown Demo".to_string(),
            city: Some("Phoenix".to_string()),
            region: Some("Phoenix Metro".to_string()),
        },
    );
    LocationStore::put(
        store,
        Location {
            id: uptown,
            tenant_id,
            slug: "loc-demo-2".to_string(),
            name: "Phoenix – Uptown Demo".to_string(),
            city: Some("Phoenix".to_string()),
            region: Some("Phoenix Metro".to_string()),
        },
    );

    store.link_buyer(BuyerLocation {
        user_id: buyer1_id,
        location_id: downtown,
    });
    store.link_buyer(BuyerLocation {
        user_id: buyer2_id,
        location_id: uptown,
    });

    OrderStore::put(
        store,
        Order {
            id: OrderId::new(),
            location_id: downtown,
            status: OrderStatus::Submitted,
            created_at: now,
            lines: vec![
                line("AVO-48", "Avocados 48ct", 4.0, 1.5, "cases"),
                line("ROMA-25", "Tomatoes Roma 25lb", 3.0, 0.5, "cases"),
                line("LETT-MIX", "Spring mix 3lb", 5.0, 4.0, "boxes"),
                line("RUS-50", "Potatoes russet 50lb", 2.0, 0.2, "sacks"),
            ],
        },
    );
    OrderStore::put(
        store,
        Order {
            id: OrderId::new(),
            location_id: uptown,
            status: OrderStatus::Submitted,
            created_at: now,
            lines: vec![
                line("AVO-48", "Avocados 48ct", 4.0, 2.0, "cases"),
                line("ROMA-25", "Tomatoes Roma 25lb", 3.0, 1.0, "cases"),
                line("LETT-MIX", "Spring mix 3lb", 5.0, 3.0, "boxes"),
                line("RUS-50", "Potatoes russet 50lb", 2.0, 0.8, "sacks"),
            ],
        },
    );

    let distributor_id = DistributorId::new();
    store.put_distributor(Distributor {
        id: distributor_id,
        tenant_id,
        name: "Valley Produce Co.".to_string(),
        email: "rep@valleyproduce.com".to_string(),
        region: "Phoenix".to_string(),
        user_id: Some(rep_id),
    });

    store.put_prices(
        distributor_id,
        vec![
            PriceEntry {
                sku: "AVO-48".to_string(),
                price_cents: Some(6200),
                submitted_at: Some(now),
                status: PriceStatus::OnTime,
            },
            PriceEntry {
                sku: "ROMA-25".to_string(),
                price_cents: Some(3200),
                submitted_at: Some(now),
                status: PriceStatus::NeedsUpdate,
            },
            PriceEntry::missing("LETT-MIX"),
            PriceEntry {
                sku: "RUS-50".to_string(),
                price_cents: Some(2800),
                submitted_at: Some(now),
                status: PriceStatus::NeedsUpdate,
            },
        ],
    );

    DemoSeed {
        tenant_id,
        distributor_id,
        downtown,
        uptown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restockr_ordering::compute_readiness;

    #[test]
    fn seeded_downtown_summary_is_red() {
        let store = InMemoryStore::new();
        let seed = seed_demo(&store);

        let order = store.latest_for_location(seed.downtown).unwrap();
        let prices = store.prices_for_distributor(seed.distributor_id);
        let summary = compute_readiness(&order.lines, &prices);

        // All four lines below par, one missing price, two stale prices.
        assert_eq!(summary.items_needing_order, 4);
        assert_eq!(summary.missing_prices, 1);
        assert_eq!(summary.needs_update_prices, 2);
        assert_eq!(summary.readiness_label, restockr_ordering::ReadinessLabel::Red);
    }

    #[test]
    fn seeded_users_cover_every_role() {
        let store = InMemoryStore::new();
        let seed = seed_demo(&store);

        for (email, role) in [
            ("founder@demo.com", Role::Founder),
            ("buyer1@demo.com", Role::Buyer),
            ("dist@demo.com", Role::Distributor),
        ] {
            let user = store.find_by_email(seed.tenant_id, email).unwrap();
            assert_eq!(user.role, role);
        }
    }

    #[test]
    fn each_buyer_is_linked_to_one_location() {
        let store = InMemoryStore::new();
        let seed = seed_demo(&store);

        for (email, location_id) in [
            ("buyer1@demo.com", seed.downtown),
            ("buyer2@demo.com", seed.uptown),
        ] {
            let buyer = store.find_by_email(seed.tenant_id, email).unwrap();
            let linked = store.locations_for_buyer(seed.tenant_id, buyer.id);
            assert_eq!(linked.len(), 1);
            assert_eq!(linked[0].id, location_id);
        }
    }

    #[test]
    fn both_locations_have_a_latest_order_with_four_lines() {
        let store = InMemoryStore::new();
        let seed = seed_demo(&store);

        for location_id in [seed.downtown, seed.uptown] {
            let order = store.latest_for_location(location_id).unwrap();
            assert_eq!(order.lines.len(), 4);
        }
    }
}
