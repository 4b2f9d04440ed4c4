//! `restockr-ordering` — pure ordering domain.
//!
//! Order lines with par/on-hand levels, weekly distributor price entries,
//! and the derived views built on top of them: the readiness summary, the
//! buyer checklist, and voice-transcript order suggestions. Everything in
//! this crate is deterministic and side-effect free; persistence and HTTP
//! live elsewhere.

pub mod checklist;
pub mod line;
pub mod pricing;
pub mod readiness;
pub mod voice;

pub use checklist::{BuyerChecklist, ChecklistEntry, ChecklistSeverity, compute_buyer_checklist};
pub use line::{Order, OrderLine, OrderStatus, PAR_EPSILON};
pub use pricing::{PriceEntry, PriceStatus};
pub use readiness::{ReadinessLabel, ReadinessSummary, compute_readiness};
pub use voice::{VoiceSuggestion, parse_transcript};
