//! `restockr-store` — injected storage abstraction for the demo backend.
//!
//! The original design kept records in a relational store; this crate
//! replaces it with explicit repository traits (get/put/list seams) and a
//! single in-memory implementation. Lifecycle is explicit: everything lives
//! for the process and is rebuilt from [`seed::seed_demo`] on startup.

pub mod error;
pub mod memory;
pub mod records;
pub mod seed;
pub mod stores;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use records::{BuyerLocation, Distributor, Invite, InviteStatus, Location, User};
pub use seed::{DemoSeed, seed_demo};
pub use stores::{
    InviteStore, LocationStore, OrderStore, PriceStore, SessionStore, UserStore,
};
