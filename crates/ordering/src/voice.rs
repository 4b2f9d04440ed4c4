//! Voice-transcript order parsing.
//!
//! Turns a dictated phrase like "3 cases avocados and 2 boxes spring mix"
//! into structured order-line suggestions by scanning for quantities and
//! matching the trailing words against a fixed keyword table. This is a
//! demo-grade stub: no NLP, no fuzzy matching, and an empty result means
//! "nothing recognized" rather than an error.

use serde::{Deserialize, Serialize};

use crate::line::OrderLine;

/// A parsed order-line suggestion from a voice transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSuggestion {
    pub sku: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Keyword -> SKU mapping for item-name detection.
///
/// Kept as an ordered association list on purpose: the first matching
/// keyword wins, and table order is the tie-break. Do not replace with a
/// hash map.
const KEYWORD_SKUS: &[(&str, &str)] = &[
    ("avocado", "AVO-48"),
    ("avocados", "AVO-48"),
    ("avo", "AVO-48"),
    ("roma", "ROMA-25"),
    ("tomato", "ROMA-25"),
    ("tomatoes", "ROMA-25"),
    ("spring mix", "LETT-MIX"),
    ("lettuce", "LETT-MIX"),
    ("potato", "RUS-50"),
    ("potatoes", "RUS-50"),
    ("russet", "RUS-50"),
];

/// Unit keywords checked (by substring) against the token after a quantity.
const UNIT_KEYWORDS: &[(&str, &str)] = &[("case", "cases"), ("box", "boxes"), ("sack", "sacks")];

fn find_sku_for_phrase(phrase: &str) -> Option<&'static str> {
    let lower = phrase.to_lowercase();
    KEYWORD_SKUS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, sku)| *sku)
}

/// Parse a free-text transcript into order-line suggestions.
///
/// Walks whitespace tokens (after dropping punctuation and the conjunction
/// "and") looking for the pattern: positive number, optional unit keyword,
/// then up to three name tokens resolved through [`KEYWORD_SKUS`]. Display
/// names come from `known_lines`, falling back to the SKU string.
pub fn parse_transcript(text: &str, known_lines: &[OrderLine]) -> Vec<VoiceSuggestion> {
    let normalized = text.replace([',', '.'], " ");
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case("and"))
        .collect();

    let mut suggestions = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let quantity = match tokens[i].parse::<f64>() {
            Ok(q) if q.is_finite() && q > 0.0 => q,
            _ => {
                i += 1;
                continue;
            }
        };

        let next = tokens.get(i + 1).map(|t| t.to_lowercase()).unwrap_or_default();
        let mut unit = "units";
        let mut name_start = i + 1;

        if let Some((_, canonical)) = UNIT_KEYWORDS.iter().find(|(kw, _)| next.contains(kw)) {
            unit = canonical;
            name_start = i + 2;
        }

        let phrase_end = (name_start + 3).min(tokens.len());
        let phrase = tokens[name_start..phrase_end].join(" ");

        if let Some(sku) = find_sku_for_phrase(&phrase) {
            let name = known_lines
                .iter()
                .find(|l| l.sku == sku)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| sku.to_string());

            suggestions.push(VoiceSuggestion {
                sku: sku.to_string(),
                name,
                quantity,
                unit: unit.to_string(),
            });
        }

        // Quantity and unit tokens are consumed; name tokens stay scannable.
        i = name_start;
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                sku: "AVO-48".to_string(),
                name: "Avocados 48ct".to_string(),
                par: 4.0,
                on_hand: 1.5,
                unit: "cases".to_string(),
            },
            OrderLine {
                sku: "LETT-MIX".to_string(),
                name: "Spring mix 3lb".to_string(),
                par: 5.0,
                on_hand: 4.0,
                unit: "boxes".to_string(),
            },
        ]
    }

    #[test]
    fn parses_two_phrases_in_encounter_order() {
        let suggestions =
            parse_transcript("3 cases avocados and 2 boxes spring mix", &demo_lines());

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].sku, "AVO-48");
        assert_eq!(suggestions[0].name, "Avocados 48ct");
        assert_eq!(suggestions[0].quantity, 3.0);
        assert_eq!(suggestions[0].unit, "cases");
        assert_eq!(suggestions[1].sku, "LETT-MIX");
        assert_eq!(suggestions[1].quantity, 2.0);
        assert_eq!(suggestions[1].unit, "boxes");
    }

    #[test]
    fn no_numeric_token_yields_nothing() {
        assert!(parse_transcript("hello world", &demo_lines()).is_empty());
    }

    #[test]
    fn missing_unit_defaults_to_units_without_consuming_a_token() {
        let suggestions = parse_transcript("2 avocados", &demo_lines());

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].unit, "units");
        assert_eq!(suggestions[0].sku, "AVO-48");
    }

    #[test]
    fn unknown_item_after_quantity_is_dropped() {
        assert!(parse_transcript("5 cases caviar", &demo_lines()).is_empty());
    }

    #[test]
    fn unknown_sku_falls_back_to_sku_string_for_name() {
        // RUS-50 resolves in the keyword table but is not in known_lines here.
        let suggestions = parse_transcript("1 sack russet potatoes", &demo_lines());

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].sku, "RUS-50");
        assert_eq!(suggestions[0].name, "RUS-50");
        assert_eq!(suggestions[0].unit, "sacks");
    }

    #[test]
    fn punctuation_and_case_are_normalized() {
        let suggestions = parse_transcript("3 Cases Avocados, AND 2 boxes LETTUCE", &demo_lines());

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].sku, "AVO-48");
        assert_eq!(suggestions[1].sku, "LETT-MIX");
    }

    #[test]
    fn zero_and_negative_quantities_are_skipped() {
        assert!(parse_transcript("0 cases avocados", &demo_lines()).is_empty());
        assert!(parse_transcript("-2 cases avocados", &demo_lines()).is_empty());
    }
}
