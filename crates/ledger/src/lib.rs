//! `restockr-ledger` — the "Mintsy" append-only event ledger.
//!
//! A thin audit trail for portal activity. Storage is behind the
//! [`LedgerStore`] trait so the lifecycle is explicit and injectable rather
//! than a process-wide array; the in-memory implementation is the only one
//! in the demo.

pub mod entry;
pub mod in_memory;

pub use entry::LedgerEntry;
pub use in_memory::InMemoryLedger;

/// Default number of entries returned by a ledger read.
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Append-only ledger storage seam.
///
/// - `append` records an event and returns the stored entry.
/// - `recent` returns up to `limit` entries, newest first.
pub trait LedgerStore: Send + Sync {
    fn append(&self, event_type: &str, payload: serde_json::Value) -> LedgerEntry;
    fn recent(&self, limit: usize) -> Vec<LedgerEntry>;
}
