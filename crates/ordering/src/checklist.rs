//! Buyer pre-send checklist.
//!
//! Derived view shown in the buyer portal before an order goes out: how many
//! lines sit below par, which are critically low or completely out, and the
//! total suggested quantity across all lines.

use serde::{Deserialize, Serialize};

use crate::line::{OrderLine, PAR_EPSILON};

/// Severity of a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistSeverity {
    Ok,
    Warn,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    #[serde(rename = "type")]
    pub severity: ChecklistSeverity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerChecklist {
    #[serde(rename = "checklistItems")]
    pub entries: Vec<ChecklistEntry>,
    #[serde(rename = "itemsNeedingOrder")]
    pub items_needing_order: usize,
    #[serde(rename = "totalSuggestedUnits")]
    pub total_suggested_units: f64,
}

fn entry(severity: ChecklistSeverity, text: impl Into<String>) -> ChecklistEntry {
    ChecklistEntry {
        severity,
        text: text.into(),
    }
}

/// Compute the buyer checklist for a set of order lines.
///
/// A line is "critically low" when the gap to par exceeds 75% of par, and
/// "completely out" when on-hand is at most [`PAR_EPSILON`].
pub fn compute_buyer_checklist(order_lines: &[OrderLine]) -> BuyerChecklist {
    let items_needing_order = order_lines.iter().filter(|l| l.needs_restock()).count();

    let critically_low: Vec<&OrderLine> = order_lines
        .iter()
        .filter(|l| l.par - l.on_hand > l.par * 0.75)
        .collect();
    let completely_out: Vec<&OrderLine> = order_lines
        .iter()
        .filter(|l| l.on_hand <= PAR_EPSILON)
        .collect();

    let total_suggested_units: f64 = order_lines.iter().map(OrderLine::suggested_quantity).sum();

    let mut entries = Vec::new();

    if items_needing_order == 0 {
        entries.push(entry(
            ChecklistSeverity::Ok,
            "All tracked items are at or above par.",
        ));
    } else {
        entries.push(entry(
            ChecklistSeverity::Warn,
            format!(
                "{items_needing_order} item{} below par. Double-check quantities before sending.",
                if items_needing_order > 1 { "s" } else { "" }
            ),
        ));
    }

    if !completely_out.is_empty() {
        let names = completely_out
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(entry(
            ChecklistSeverity::Alert,
            format!("You are completely out of: {names}. Confirm delivery timing."),
        ));
    }

    if !critically_low.is_empty() && items_needing_order > 0 {
        let names = critically_low
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(entry(
            ChecklistSeverity::Warn,
            format!("Critical low stock on: {names}. Consider ordering a bit extra."),
        ));
    }

    entries.push(entry(
        ChecklistSeverity::Ok,
        "Scan high-dollar items for mistakes (proteins, liquor, high-end produce).",
    ));

    BuyerChecklist {
        entries,
        items_needing_order,
        total_suggested_units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, par: f64, on_hand: f64) -> OrderLine {
        OrderLine {
            sku: name.to_string(),
            name: name.to_string(),
            par,
            on_hand,
            unit: "cases".to_string(),
        }
    }

    #[test]
    fn fully_stocked_checklist_has_two_ok_entries() {
        let checklist = compute_buyer_checklist(&[line("Avocados 48ct", 4.0, 4.0)]);

        assert_eq!(checklist.items_needing_order, 0);
        assert_eq!(checklist.total_suggested_units, 0.0);
        assert_eq!(checklist.entries.len(), 2);
        assert!(checklist
            .entries
            .iter()
            .all(|e| e.severity == ChecklistSeverity::Ok));
    }

    #[test]
    fn out_of_stock_line_raises_an_alert_naming_it() {
        let lines = vec![line("Avocados 48ct", 4.0, 0.0), line("Spring mix 3lb", 5.0, 4.0)];
        let checklist = compute_buyer_checklist(&lines);

        assert_eq!(checklist.items_needing_order, 2);
        let alert = checklist
            .entries
            .iter()
            .find(|e| e.severity == ChecklistSeverity::Alert)
            .expect("expected an alert entry");
        assert!(alert.text.contains("Avocados 48ct"));
        assert!(!alert.text.contains("Spring mix"));
    }

    #[test]
    fn critically_low_lines_are_called_out() {
        // Gap of 1.8 out of par 2.0 is more than 75% below par.
        let checklist = compute_buyer_checklist(&[line("Potatoes russet 50lb", 2.0, 0.2)]);

        assert!(checklist
            .entries
            .iter()
            .any(|e| e.text.starts_with("Critical low stock on: Potatoes russet 50lb")));
    }

    #[test]
    fn total_suggested_units_floors_each_line_at_zero() {
        let lines = vec![line("A", 4.0, 1.0), line("B", 2.0, 5.0)];
        let checklist = compute_buyer_checklist(&lines);

        assert_eq!(checklist.total_suggested_units, 3.0);
    }
}
