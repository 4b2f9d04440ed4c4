//! Readiness aggregation for the founder dashboard.
//!
//! Given a location's most recent order lines and the distributor's
//! current-week price rows, derive three counts (items below par, missing
//! prices, prices needing an update), classify overall readiness on an
//! ordered Green/Yellow/Red scale, and emit advisory sentences. The summary
//! is computed fresh per call and never cached or persisted.

use serde::{Deserialize, Serialize};

use crate::line::OrderLine;
use crate::pricing::{PriceEntry, PriceStatus};

/// Three-level ordinal health indicator for order/auction readiness.
///
/// Declaration order is the severity order: `Green < Yellow < Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessLabel {
    Green,
    Yellow,
    Red,
}

/// Derived readiness view. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    #[serde(rename = "itemsNeedingOrder")]
    pub items_needing_order: usize,
    #[serde(rename = "missingPrices")]
    pub missing_prices: usize,
    #[serde(rename = "needsUpdatePrices")]
    pub needs_update_prices: usize,
    #[serde(rename = "readinessLabel")]
    pub readiness_label: ReadinessLabel,
    pub advisories: Vec<String>,
}

/// Classify the three counts (first match wins).
fn classify(items_needing_order: usize, missing_prices: usize, needs_update_prices: usize) -> ReadinessLabel {
    if items_needing_order == 0 && missing_prices == 0 && needs_update_prices == 0 {
        ReadinessLabel::Green
    } else if missing_prices == 0 && needs_update_prices <= 1 && items_needing_order <= 1 {
        ReadinessLabel::Yellow
    } else {
        ReadinessLabel::Red
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// Compute the readiness summary for one location.
///
/// Pure and order-independent over both input lists; empty inputs are valid
/// and yield Green with the two all-clear sentences.
pub fn compute_readiness(order_lines: &[OrderLine], price_entries: &[PriceEntry]) -> ReadinessSummary {
    let items_needing_order = order_lines.iter().filter(|l| l.needs_restock()).count();
    let missing_prices = price_entries
        .iter()
        .filter(|p| p.status == PriceStatus::Missing)
        .count();
    let needs_update_prices = price_entries
        .iter()
        .filter(|p| p.status == PriceStatus::NeedsUpdate)
        .count();

    let readiness_label = classify(items_needing_order, missing_prices, needs_update_prices);

    let mut advisories = Vec::new();

    if items_needing_order > 0 {
        advisories.push(format!(
            "There are {items_needing_order} item{} below par in the most recent order. \
             Confirm quantities for the highest-risk items before sending.",
            plural(items_needing_order)
        ));
    } else {
        advisories.push(
            "No items are currently below par in the most recent order. \
             This is a low-risk starting point."
                .to_string(),
        );
    }

    if missing_prices > 0 {
        advisories.push(format!(
            "Resolve {missing_prices} missing price{} with your distributor \
             so those items can participate in the auction.",
            plural(missing_prices)
        ));
    }

    if needs_update_prices > 0 {
        advisories.push(format!(
            "Refresh weekly pricing for {needs_update_prices} item{} marked as \
             \"Needs update\" before relying on tonight's results.",
            plural(needs_update_prices)
        ));
    }

    if missing_prices == 0 && needs_update_prices == 0 {
        advisories.push(
            "All tracked items have pricing. \
             You can focus attention on high-dollar items and outliers."
                .to_string(),
        );
    }

    ReadinessSummary {
        items_needing_order,
        missing_prices,
        needs_update_prices,
        readiness_label,
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(sku: &str, par: f64, on_hand: f64) -> OrderLine {
        OrderLine {
            sku: sku.to_string(),
            name: sku.to_string(),
            par,
            on_hand,
            unit: "cases".to_string(),
        }
    }

    fn entry(sku: &str, status: PriceStatus) -> PriceEntry {
        PriceEntry {
            sku: sku.to_string(),
            price_cents: Some(1000),
            submitted_at: None,
            status,
        }
    }

    #[test]
    fn empty_inputs_are_green_with_both_all_clear_sentences() {
        let summary = compute_readiness(&[], &[]);

        assert_eq!(summary.items_needing_order, 0);
        assert_eq!(summary.missing_prices, 0);
        assert_eq!(summary.needs_update_prices, 0);
        assert_eq!(summary.readiness_label, ReadinessLabel::Green);
        assert_eq!(summary.advisories.len(), 2);
        assert!(summary.advisories[0].starts_with("No items are currently below par"));
        assert!(summary.advisories[1].starts_with("All tracked items have pricing"));
    }

    #[test]
    fn lines_at_or_above_par_do_not_count() {
        let lines = vec![line("AVO-48", 4.0, 4.0), line("ROMA-25", 3.0, 5.0)];
        let summary = compute_readiness(&lines, &[]);

        assert_eq!(summary.items_needing_order, 0);
        assert_eq!(summary.readiness_label, ReadinessLabel::Green);
    }

    #[test]
    fn any_missing_price_forces_red() {
        let lines = vec![line("AVO-48", 4.0, 1.5)];
        let prices = vec![entry("AVO-48", PriceStatus::Missing)];
        let summary = compute_readiness(&lines, &prices);

        assert_eq!(summary.items_needing_order, 1);
        assert_eq!(summary.missing_prices, 1);
        assert_eq!(summary.needs_update_prices, 0);
        assert_eq!(summary.readiness_label, ReadinessLabel::Red);
    }

    #[test]
    fn single_below_par_and_single_needs_update_is_yellow() {
        let lines = vec![line("AVO-48", 4.0, 1.5)];
        let prices = vec![entry("ROMA-25", PriceStatus::NeedsUpdate)];
        let summary = compute_readiness(&lines, &prices);

        assert_eq!(summary.readiness_label, ReadinessLabel::Yellow);
    }

    #[test]
    fn two_stale_prices_are_red_even_with_full_shelves() {
        let prices = vec![
            entry("ROMA-25", PriceStatus::NeedsUpdate),
            entry("RUS-50", PriceStatus::NeedsUpdate),
        ];
        let summary = compute_readiness(&[], &prices);

        assert_eq!(summary.readiness_label, ReadinessLabel::Red);
    }

    #[test]
    fn advisory_order_and_pluralization() {
        let lines = vec![line("AVO-48", 4.0, 1.5), line("ROMA-25", 3.0, 0.5)];
        let prices = vec![
            entry("LETT-MIX", PriceStatus::Missing),
            entry("ROMA-25", PriceStatus::NeedsUpdate),
        ];
        let summary = compute_readiness(&lines, &prices);

        assert_eq!(summary.advisories.len(), 3);
        assert!(summary.advisories[0].starts_with("There are 2 items below par"));
        assert!(summary.advisories[1].starts_with("Resolve 1 missing price with"));
        assert!(summary.advisories[2].starts_with("Refresh weekly pricing for 1 item marked"));
    }

    #[test]
    fn epsilon_boundary_is_strict() {
        // A gap of exactly 0.01 does not count; 0.0101 does.
        let at = vec![line("AVO-48", 0.01, 0.0)];
        let over = vec![line("AVO-48", 0.0101, 0.0)];

        assert_eq!(compute_readiness(&at, &[]).items_needing_order, 0);
        assert_eq!(compute_readiness(&over, &[]).items_needing_order, 1);
    }

    proptest! {
        // Raising any one count never improves the label.
        #[test]
        fn label_is_monotone_in_each_count(
            items in 0usize..5,
            missing in 0usize..5,
            stale in 0usize..5,
        ) {
            let base = classify(items, missing, stale);

            prop_assert!(classify(items + 1, missing, stale) >= base);
            prop_assert!(classify(items, missing + 1, stale) >= base);
            prop_assert!(classify(items, missing, stale + 1) >= base);
        }
    }
}
