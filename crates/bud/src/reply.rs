use serde::{Deserialize, Serialize};

use restockr_auth::Role;

/// A Bud answer plus follow-up suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudReply {
    pub answer: String,
    pub suggestions: Vec<String>,
}

fn question_mentions(question: &str, keywords: &[&str]) -> bool {
    let lower = question.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Produce Bud's reply for a role, location, and free-text question.
///
/// Branching mirrors the portal behavior: each role has one keyword-matched
/// answer and one fallback; a blank question always gets the generic
/// welcome regardless of role.
pub fn respond(role: Role, location_name: &str, question: &str) -> BudReply {
    let question = question.trim();

    if question.is_empty() {
        return BudReply {
            answer: format!(
                "I'm Bud, your Restockr assistant. I can help you reason about inventory, \
                 pricing, and readiness for {location_name}. Tell me your role and ask a \
                 question like \"Where is my biggest risk tonight?\""
            ),
            suggestions: vec![
                "Ask: \"What should I double-check before sending tonight's order?\"".to_string(),
                "Ask: \"Are my prices complete for this week?\"".to_string(),
            ],
        };
    }

    match role {
        Role::Buyer => {
            if question_mentions(question, &["par", "on hand", "order", "tonight"]) {
                BudReply {
                    answer: format!(
                        "For {location_name}, I would double-check high-volume items and anything \
                         with low on-hand against your par levels. If any item is more than 75% \
                         below par, bump up the order slightly to avoid last-minute shortages."
                    ),
                    suggestions: vec![
                        "Review items marked as pinned in your Buyer portal and confirm their quantities.".to_string(),
                        "Check any items with a long lead time and prioritize those in tonight's order.".to_string(),
                        "If you have time, scan high-dollar items (proteins, liquor) for count accuracy.".to_string(),
                    ],
                }
            } else {
                BudReply {
                    answer: format!(
                        "From a buyer perspective at {location_name}, the main risk is \
                         under-ordering critical items and over-ordering slow movers. Ask me about \
                         specific SKUs or categories, and I'll suggest adjustments."
                    ),
                    suggestions: vec![
                        "Ask: \"Which items look at risk of running out tonight?\"".to_string(),
                        "Ask: \"Where am I over par that could lead to waste?\"".to_string(),
                    ],
                }
            }
        }
        Role::Distributor => {
            if question_mentions(question, &["pricing", "price", "update"]) {
                BudReply {
                    answer: format!(
                        "For your weekly pricing, focus first on items flagged as \"needs update\" \
                         or \"missing\". Those gaps create uncertainty for {location_name} and can \
                         exclude items from the auction."
                    ),
                    suggestions: vec![
                        "Update prices for all missing SKUs before Monday 9:00am.".to_string(),
                        "Review high-volume or high-margin SKUs first, so the most important items are never missing.".to_string(),
                        "Establish a recurring calendar reminder for price updates each Sunday or Monday morning.".to_string(),
                    ],
                }
            } else {
                BudReply {
                    answer: format!(
                        "From a distributor standpoint, your reliability is measured by how quickly \
                         and consistently you maintain complete pricing coverage. Clear, up-to-date \
                         prices make you the default choice for {location_name}."
                    ),
                    suggestions: vec![
                        "Ask: \"Which SKUs are most often missing prices?\"".to_string(),
                        "Ask: \"How can I reduce pricing gaps week over week?\"".to_string(),
                    ],
                }
            }
        }
        Role::Founder => {
            if question_mentions(question, &["risk", "ready", "readiness", "tonight"]) {
                BudReply {
                    answer: format!(
                        "For {location_name}, I'd look at three lenses: items below par, missing or \
                         outdated prices, and any unusual patterns in order volume. If all three \
                         are under control, tonight's auction risk is low."
                    ),
                    suggestions: vec![
                        "Review the founder dashboard for items needing order and pricing coverage.".to_string(),
                        "Ask managers to confirm any items that are both high-cost and low on hand.".to_string(),
                        "If something looks off, consider tightening which SKUs participate in tonight's auction.".to_string(),
                    ],
                }
            } else {
                BudReply {
                    answer: "As founder, think of Bud as your operating assistant across all \
                             restaurants. Ask Bud about readiness per location, pricing \
                             reliability, and where your team might need extra support."
                        .to_string(),
                    suggestions: vec![
                        "Ask: \"Which location looks riskiest tonight and why?\"".to_string(),
                        "Ask: \"How can I standardize ordering across both restaurants?\"".to_string(),
                    ],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_question_gets_the_welcome_for_any_role() {
        for role in [Role::Buyer, Role::Distributor, Role::Founder] {
            let reply = respond(role, "Downtown", "   ");
            assert!(reply.answer.starts_with("I'm Bud, your Restockr assistant."));
            assert_eq!(reply.suggestions.len(), 2);
        }
    }

    #[test]
    fn buyer_par_question_hits_the_par_branch() {
        let reply = respond(Role::Buyer, "Phoenix – Downtown Demo", "Is anything under PAR?");
        assert!(reply.answer.contains("Phoenix – Downtown Demo"));
        assert!(reply.answer.contains("par levels"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn distributor_pricing_question_mentions_flagged_items() {
        let reply = respond(Role::Distributor, "Uptown", "when should I update pricing?");
        assert!(reply.answer.contains("needs update"));
    }

    #[test]
    fn founder_off_topic_question_gets_the_fallback() {
        let reply = respond(Role::Founder, "Uptown", "tell me a joke");
        assert!(reply.answer.starts_with("As founder"));
        assert_eq!(reply.suggestions.len(), 2);
    }
}
