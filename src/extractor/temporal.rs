use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::policy::{TimeRestriction, TimeUnit};

lazy_static! {
    static ref TIME_PATTERN: Regex =
        Regex::new(r"(?i)\b(\d+)\s*(hours?|days?|minutes?)\b").unwrap();
}

/// Extract a time restriction like "for 2 hours"; the first occurrence in the
/// text wins. The unit is normalized by its first letter.
pub fn extract_time_restriction(text: &str) -> Option<TimeRestriction> {
    let captures = TIME_PATTERN.captures(text)?;
    let duration: u32 = captures[1].parse().ok()?;
    let unit = match captures[2].to_lowercase().chars().next() {
        Some('h') => TimeUnit::Hours,
        Some('d') => TimeUnit::Days,
        _ => TimeUnit::Minutes,
    };
    Some(TimeRestriction { duration, unit })
}
