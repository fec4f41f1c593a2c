use crate::engine::policy::PolicyAction;
use crate::lexicon::matcher;

/// Extract canonical role tags, defaulting to `admin` when nothing matches.
pub fn extract_roles(text: &str) -> Vec<String> {
    let found = matcher::roles().scan(text);
    if found.is_empty() {
        return vec!["admin".to_string()];
    }
    found.into_iter().map(str::to_string).collect()
}

/// Extract canonical data-field tags, skipping tags already marked restricted.
///
/// Defaults to `patient_record` when nothing survives the exclusion.
pub fn extract_data_fields(text: &str, exclude_restricted: &[String]) -> Vec<String> {
    let found: Vec<String> = matcher::data_fields()
        .scan(text)
        .into_iter()
        .filter(|tag| !exclude_restricted.iter().any(|r| r == tag))
        .map(str::to_string)
        .collect();
    if found.is_empty() {
        return vec!["patient_record".to_string()];
    }
    found
}

/// Extract the single policy action, defaulting to `View` when no cue is found.
///
/// First match wins, probing the action table in declaration order.
pub fn extract_action(text: &str) -> PolicyAction {
    matcher::actions()
        .first_match(text)
        .unwrap_or(PolicyAction::View)
}
