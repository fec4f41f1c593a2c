use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::policy::ConditionalAccess;

lazy_static! {
    /// Ordered trigger patterns; the first one that matches wins and any later
    /// triggers in the same text are ignored.
    static ref CONDITION_TRIGGERS: Vec<(Regex, ConditionalAccess)> = vec![
        (
            Regex::new(r"(?i)\bactive\s+consultation\s+session").unwrap(),
            ConditionalAccess::ActiveConsultationSession,
        ),
        (
            Regex::new(r"(?i)\b(?:only\s+)?for\s+treatment\s+purposes").unwrap(),
            ConditionalAccess::TreatmentPurposesOnly,
        ),
        (
            Regex::new(r"(?i)\b(?:only\s+)?for\s+claim\s+validation").unwrap(),
            ConditionalAccess::ClaimValidationOnly,
        ),
        (
            Regex::new(r"(?i)\b(?:during\s+)?business\s+hours").unwrap(),
            ConditionalAccess::BusinessHours,
        ),
    ];
}

/// Extract the conditional-access qualifier, if any trigger phrase occurs.
pub fn extract_conditional_access(text: &str) -> Option<ConditionalAccess> {
    CONDITION_TRIGGERS
        .iter()
        .find(|(trigger, _)| trigger.is_match(text))
        .map(|(_, condition)| *condition)
}
