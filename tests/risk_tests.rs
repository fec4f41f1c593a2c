use nl2policy::engine::assembler::generate_policy;
use nl2policy::engine::policy::{
    ConditionalAccess, DataTransformation, GeneratedPolicy, PolicyAction, RestrictionKind,
    TimeRestriction, TimeUnit,
};
use nl2policy::engine::risk::{assess_risk, risk_score, RiskLevel};

fn policy(action: PolicyAction, role: &[&str], data_field: &[&str]) -> GeneratedPolicy {
    GeneratedPolicy {
        role: role.iter().map(ToString::to_string).collect(),
        data_field: data_field.iter().map(ToString::to_string).collect(),
        action,
        data_transformation: DataTransformation::None,
        restrictions: None,
        restricted_fields: None,
        time_restriction: None,
        conditional_access: None,
    }
}

#[test]
fn unrestricted_admin_delete_of_pii_is_high_risk() {
    let p = policy(PolicyAction::Delete, &["admin"], &["pii"]);
    // 3 (delete) + 2 (pii) + 1 (admin) + 1 (no restrictions)
    assert_eq!(risk_score(&p), 7);
    assert_eq!(assess_risk(&p), RiskLevel::High);
}

#[test]
fn heavily_mitigated_view_goes_negative_and_stays_low() {
    let p = GeneratedPolicy {
        restrictions: Some(vec![
            RestrictionKind::RestrictIdentifiers,
            RestrictionKind::TimeLimited,
            RestrictionKind::Conditional,
        ]),
        restricted_fields: Some(vec!["name".to_string()]),
        time_restriction: Some(TimeRestriction {
            duration: 2,
            unit: TimeUnit::Hours,
        }),
        conditional_access: Some(ConditionalAccess::TreatmentPurposesOnly),
        ..policy(PolicyAction::View, &["doctor"], &["prescription"])
    };
    // 1 (view) - 1 (restricted fields) - 1 (time) - 1 (conditional)
    assert_eq!(risk_score(&p), -2);
    assert_eq!(assess_risk(&p), RiskLevel::Low);
}

#[test]
fn action_severity_weights() {
    for action in [PolicyAction::Delete, PolicyAction::Write, PolicyAction::Edit] {
        assert_eq!(risk_score(&policy(action, &["doctor"], &["billing"])), 4);
    }
    assert_eq!(
        risk_score(&policy(PolicyAction::Detokenize, &["doctor"], &["billing"])),
        3
    );
    for action in [
        PolicyAction::View,
        PolicyAction::Read,
        PolicyAction::Analyze,
        PolicyAction::Tokenize,
    ] {
        assert_eq!(risk_score(&policy(action, &["doctor"], &["billing"])), 2);
    }
}

#[test]
fn sensitive_fields_and_admin_role_add_penalties() {
    for field in ["pii", "national_id", "card_number"] {
        assert_eq!(risk_score(&policy(PolicyAction::Read, &["doctor"], &[field])), 4);
    }
    assert_eq!(
        risk_score(&policy(PolicyAction::Read, &["admin"], &["billing"])),
        3
    );
}

#[test]
fn empty_restrictions_list_counts_as_unrestricted() {
    let mut p = policy(PolicyAction::Read, &["doctor"], &["billing"]);
    p.restrictions = Some(Vec::new());
    assert_eq!(risk_score(&p), 2);
}

#[test]
fn level_mapping_boundaries() {
    // Score 2 → Low, 3 → Medium, 4 → Medium, 5 → High.
    assert_eq!(assess_risk(&policy(PolicyAction::Read, &["doctor"], &["billing"])), RiskLevel::Low);
    assert_eq!(assess_risk(&policy(PolicyAction::Read, &["admin"], &["billing"])), RiskLevel::Medium);
    assert_eq!(assess_risk(&policy(PolicyAction::Read, &["doctor"], &["pii"])), RiskLevel::Medium);
    assert_eq!(assess_risk(&policy(PolicyAction::Read, &["admin"], &["pii"])), RiskLevel::High);
}

#[test]
fn risk_is_a_pure_function_of_the_policy_value() {
    let input = "Let analysts detokenize national_id for 2 hours";
    let a = generate_policy(input);
    let b = generate_policy(input);
    assert_eq!(assess_risk(&a), assess_risk(&b));
    // Scores 4: 2 (detokenize) + 2 (national_id) + 1 (admin fallback) - 1 (time).
    assert_eq!(risk_score(&a), 4);
    assert_eq!(assess_risk(&a), RiskLevel::Medium);
}
