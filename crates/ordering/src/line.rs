use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restockr_core::{LocationId, OrderId};

/// Comparison slack for par/on-hand arithmetic.
///
/// On-hand counts come in as decimals (half a case, 0.2 of a sack), so a
/// strict `par > on_hand` check would flag float noise. A line is below par
/// only when the gap exceeds this epsilon.
pub const PAR_EPSILON: f64 = 0.01;

/// One SKU on an order: target stock (par) vs the current count (on-hand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub name: String,
    pub par: f64,
    #[serde(rename = "onHand")]
    pub on_hand: f64,
    pub unit: String,
}

impl OrderLine {
    /// Whether this line needs restocking (`par - on_hand > PAR_EPSILON`, strict).
    pub fn needs_restock(&self) -> bool {
        self.par - self.on_hand > PAR_EPSILON
    }

    /// Suggested order quantity: the gap to par, floored at zero.
    pub fn suggested_quantity(&self) -> f64 {
        (self.par - self.on_hand).max(0.0)
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Submitted,
}

/// A supply order for a location (header + lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub location_id: LocationId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Overwrite the on-hand count for a SKU. Returns false if the SKU is
    /// not on this order.
    pub fn set_on_hand(&mut self, sku: &str, on_hand: f64) -> bool {
        match self.lines.iter_mut().find(|l| l.sku == sku) {
            Some(line) => {
                line.on_hand = on_hand;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(par: f64, on_hand: f64) -> OrderLine {
        OrderLine {
            sku: "AVO-48".to_string(),
            name: "Avocados 48ct".to_string(),
            par,
            on_hand,
            unit: "cases".to_string(),
        }
    }

    #[test]
    fn gap_of_exactly_epsilon_is_not_below_par() {
        assert!(!line(0.01, 0.0).needs_restock());
    }

    #[test]
    fn gap_just_over_epsilon_is_below_par() {
        assert!(line(0.0101, 0.0).needs_restock());
    }

    #[test]
    fn overstocked_line_suggests_zero() {
        assert_eq!(line(2.0, 5.0).suggested_quantity(), 0.0);
    }

    #[test]
    fn set_on_hand_only_touches_matching_sku() {
        let mut order = Order {
            id: OrderId::new(),
            location_id: restockr_core::LocationId::new(),
            status: OrderStatus::Submitted,
            created_at: Utc::now(),
            lines: vec![line(4.0, 1.5)],
        };

        assert!(order.set_on_hand("AVO-48", 3.0));
        assert_eq!(order.lines[0].on_hand, 3.0);
        assert!(!order.set_on_hand("ROMA-25", 1.0));
    }
}
