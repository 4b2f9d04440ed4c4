use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ledger record: what happened, when, and the free-form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub payload: serde_json::Value,
}

impl LedgerEntry {
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            // v7 keeps ids time-ordered, matching append order.
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            event_type: event_type.into(),
            payload,
        }
    }
}
