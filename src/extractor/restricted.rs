use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::matcher;

lazy_static! {
    /// Lead-in patterns for explicit exclusion clauses. Each capture runs to the
    /// next period, comma, "and", or "but".
    static ref RESTRICT_CLAUSES: Vec<Regex> = vec![
        Regex::new(r"restrict\s+(?:access\s+to\s+)?([^.]+?)(?:\.|$|,|and|but)").unwrap(),
        Regex::new(r"restrict\s+([^.]+?)(?:\.|$|,|and|but)").unwrap(),
        Regex::new(r"(?:direct\s+)?identifiers?\s+like\s+([^.]+?)(?:\.|$|,|and|but)").unwrap(),
        Regex::new(r"(?:except|excluding)\s+([^.]+?)(?:\.|$|,|and|but)").unwrap(),
    ];
}

/// Extract canonical tags for fields explicitly excluded from access.
///
/// Two passes: clause spans matched by the lead-in patterns are resolved
/// through the data-field lexicon, and, whenever the literal word "restrict"
/// appears anywhere in the text, direct-identifier names found anywhere in
/// the text are added as well, even outside a formal restriction clause.
/// The second pass favors recall over precision; current product flows rely
/// on it.
pub fn extract_restricted_fields(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut restricted: Vec<String> = Vec::new();

    for clause in RESTRICT_CLAUSES.iter() {
        for captures in clause.captures_iter(&lower) {
            let span = &captures[1];
            for tag in matcher::data_fields().scan(span) {
                if !restricted.iter().any(|r| r == tag) {
                    restricted.push(tag.to_string());
                }
            }
        }
    }

    if lower.contains("restrict") {
        for tag in matcher::direct_identifiers().scan(&lower) {
            if !restricted.iter().any(|r| r == tag) {
                restricted.push(tag.to_string());
            }
        }
    }

    restricted
}
