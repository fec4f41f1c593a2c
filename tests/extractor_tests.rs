use nl2policy::engine::policy::{ConditionalAccess, PolicyAction, TimeRestriction, TimeUnit};
use nl2policy::extractor::conditional::extract_conditional_access;
use nl2policy::extractor::restricted::extract_restricted_fields;
use nl2policy::extractor::subjects::{extract_action, extract_data_fields, extract_roles};
use nl2policy::extractor::temporal::extract_time_restriction;

#[test]
fn restriction_clause_lead_ins_are_recognized() {
    assert_eq!(
        extract_restricted_fields("restrict access to phone numbers."),
        vec!["phone_number", "phone"]
    );
    assert_eq!(
        extract_restricted_fields("share records excluding date of birth, nothing else"),
        vec!["date_of_birth"]
    );
    assert_eq!(
        extract_restricted_fields("mask direct identifiers like ssn"),
        vec!["national_id"]
    );
}

#[test]
fn clause_capture_stops_at_conjunctions() {
    // "but" ends the clause: the email mention after it is not part of the
    // exclusion, and without the word "restrict" no direct-mention pass runs.
    let tags = extract_restricted_fields("except names but share email freely");
    assert_eq!(tags, vec!["name"]);
}

#[test]
fn restrict_keyword_broadens_recall_to_the_whole_text() {
    // "address" sits outside the clause yet is still collected once
    // "restrict" appears anywhere.
    let tags = extract_restricted_fields("restrict billing. send mail to the address on file");
    assert!(tags.contains(&"billing".to_string()));
    assert!(tags.contains(&"address".to_string()));
}

#[test]
fn restricted_fields_deduplicate_preserving_first_detection() {
    let tags = extract_restricted_fields("restrict name, restrict names");
    assert_eq!(tags, vec!["name"]);
}

#[test]
fn roles_collapse_synonyms_and_plurals() {
    assert_eq!(extract_roles("nurses and the nurse practitioner"), vec![
        "medical_staff",
        "nurse_practitioner"
    ]);
    assert_eq!(extract_roles("the sysadmin"), vec!["system_administrator"]);
}

#[test]
fn data_fields_collapse_synonyms() {
    assert_eq!(
        extract_data_fields("credit card and payment card details", &[]),
        vec!["card_number"]
    );
}

#[test]
fn action_declaration_order_breaks_ties() {
    // "export" (read) is declared before "update" (edit) in the table, so a
    // request containing both resolves to read.
    assert_eq!(extract_action("export and update the claims"), PolicyAction::Read);
    // "mask" maps to tokenize, not to a masking action.
    assert_eq!(extract_action("mask the ssn"), PolicyAction::Tokenize);
}

#[test]
fn time_restrictions_allow_flexible_spacing() {
    assert_eq!(
        extract_time_restriction("expires after 36h... after 36 hours"),
        Some(TimeRestriction {
            duration: 36,
            unit: TimeUnit::Hours
        })
    );
    assert_eq!(
        extract_time_restriction("valid 5days"),
        Some(TimeRestriction {
            duration: 5,
            unit: TimeUnit::Days
        })
    );
}

#[test]
fn conditional_triggers_tolerate_optional_lead_words() {
    assert_eq!(
        extract_conditional_access("for treatment purposes"),
        Some(ConditionalAccess::TreatmentPurposesOnly)
    );
    assert_eq!(
        extract_conditional_access("only for claim validation"),
        Some(ConditionalAccess::ClaimValidationOnly)
    );
    assert_eq!(
        extract_conditional_access("business hours only"),
        Some(ConditionalAccess::BusinessHours)
    );
}
