//! In-memory ledger for the demo deployment.

use std::sync::RwLock;

use crate::entry::LedgerEntry;
use crate::LedgerStore;

/// Lock-backed append-only ledger.
///
/// - No IO / no async
/// - Entries live for the process lifetime only
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedger {
    fn append(&self, event_type: &str, payload: serde_json::Value) -> LedgerEntry {
        let entry = LedgerEntry::new(event_type, payload);
        if let Ok(mut entries) = self.entries.write() {
            entries.push(entry.clone());
        }
        entry
    }

    fn recent(&self, limit: usize) -> Vec<LedgerEntry> {
        let entries = match self.entries.read() {
            Ok(e) => e,
            Err(_) => return vec![],
        };

        entries.iter().rev().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recent_returns_newest_first() {
        let ledger = InMemoryLedger::new();
        ledger.append("order.updated", json!({ "orderId": "a" }));
        ledger.append("price.submitted", json!({ "sku": "AVO-48" }));
        ledger.append("invite.created", json!({ "email": "x@demo.com" }));

        let recent = ledger.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].event_type, "invite.created");
        assert_eq!(recent[1].event_type, "price.submitted");
    }

    #[test]
    fn limit_larger_than_ledger_returns_everything() {
        let ledger = InMemoryLedger::new();
        ledger.append("order.updated", json!({}));

        assert_eq!(ledger.recent(50).len(), 1);
    }

    #[test]
    fn entries_carry_their_payload_verbatim() {
        let ledger = InMemoryLedger::new();
        let stored = ledger.append("bud.chat", json!({ "question": "ready?" }));

        assert_eq!(stored.payload["question"], "ready?");
        assert_eq!(ledger.recent(1)[0], stored);
    }
}
