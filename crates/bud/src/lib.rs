//! `restockr-bud` — the rule-based "Bud" assistant stub.
//!
//! No external AI and no storage: answers are canned per role, picked by
//! case-insensitive keyword matching on the question, with the location
//! name interpolated in. Deterministic by construction so portal flows can
//! be tested end to end.

pub mod reply;

pub use reply::{BudReply, respond};
