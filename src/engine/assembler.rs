use crate::engine::policy::{GeneratedPolicy, RestrictionKind};
use crate::engine::transformation::infer_data_transformation;
use crate::extractor::conditional::extract_conditional_access;
use crate::extractor::restricted::extract_restricted_fields;
use crate::extractor::subjects::{extract_action, extract_data_fields, extract_roles};
use crate::extractor::temporal::extract_time_restriction;

/// Parse a natural-language request into a structured policy.
///
/// Total over all strings: unmatched input degrades to safe defaults, and
/// empty or whitespace-only input returns the fallback policy outright.
pub fn generate_policy(input: &str) -> GeneratedPolicy {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return GeneratedPolicy::fallback();
    }

    // Restricted fields come first: their results gate data-field extraction.
    let restricted_fields = extract_restricted_fields(trimmed);
    let role = extract_roles(trimmed);
    let data_field = extract_data_fields(trimmed, &restricted_fields);
    let action = extract_action(trimmed);
    let data_transformation = infer_data_transformation(action, trimmed);
    let time_restriction = extract_time_restriction(trimmed);
    let conditional_access = extract_conditional_access(trimmed);

    // The "pii" umbrella tag never survives into the final lists; the specific
    // tags captured alongside it carry the information.
    let data_field: Vec<String> = data_field.into_iter().filter(|f| f != "pii").collect();
    let data_field = if data_field.is_empty() {
        vec!["patient_record".to_string()]
    } else {
        data_field
    };
    let restricted_fields: Vec<String> =
        restricted_fields.into_iter().filter(|f| f != "pii").collect();

    let mut restrictions = Vec::new();
    if !restricted_fields.is_empty() {
        restrictions.push(RestrictionKind::RestrictIdentifiers);
    }
    if time_restriction.is_some() {
        restrictions.push(RestrictionKind::TimeLimited);
    }
    if conditional_access.is_some() {
        restrictions.push(RestrictionKind::Conditional);
    }

    GeneratedPolicy {
        role,
        data_field,
        action,
        data_transformation,
        restrictions: (!restrictions.is_empty()).then_some(restrictions),
        restricted_fields: (!restricted_fields.is_empty()).then_some(restricted_fields),
        time_restriction,
        conditional_access,
    }
}
