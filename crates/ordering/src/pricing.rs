use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weekly price row status, as tracked per SKU for a distributor.
///
/// The status is authoritative: readiness logic must not re-derive it from
/// `price_cents` (a row can carry a stale price and still be `NeedsUpdate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceStatus {
    OnTime,
    NeedsUpdate,
    Missing,
}

/// One SKU's current-week price row for a distributor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub sku: String,
    #[serde(rename = "priceCents")]
    pub price_cents: Option<u64>,
    #[serde(rename = "lastSubmitted")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub status: PriceStatus,
}

impl PriceEntry {
    /// A row with no price on file yet.
    pub fn missing(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            price_cents: None,
            submitted_at: None,
            status: PriceStatus::Missing,
        }
    }

    /// Record a fresh weekly submission for this SKU.
    pub fn submit(&mut self, price_cents: u64, submitted_at: DateTime<Utc>) {
        self.price_cents = Some(price_cents);
        self.submitted_at = Some(submitted_at);
        self.status = PriceStatus::OnTime;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitting_clears_missing_status() {
        let mut entry = PriceEntry::missing("LETT-MIX");
        entry.submit(4100, Utc::now());
        assert_eq!(entry.status, PriceStatus::OnTime);
        assert_eq!(entry.price_cents, Some(4100));
        assert!(entry.submitted_at.is_some());
    }
}
