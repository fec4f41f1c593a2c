use crate::engine::policy::PolicyAction;

/// Surface-form → canonical role tag, in declaration order.
///
/// Specific medical roles are listed after the generic ones but map to their
/// own tags, so "chief medical officer" does not collapse into "doctor".
pub const ROLE_TABLE: &[(&str, &str)] = &[
    ("admin", "admin"),
    ("admins", "admin"),
    ("administrator", "admin"),
    ("doctor", "doctor"),
    ("doctors", "doctor"),
    ("senior_doctor", "senior_doctor"),
    ("senior_doctors", "senior_doctor"),
    ("medical_staff", "medical_staff"),
    ("analytics_team", "analytics_team"),
    ("insurance_verification_team", "insurance_verification_team"),
    ("insurance_team", "insurance_verification_team"),
    ("support", "support"),
    ("customer_support", "support"),
    ("manager", "manager"),
    ("managers", "manager"),
    ("nurse", "medical_staff"),
    ("nurses", "medical_staff"),
    // Executive & leadership
    ("cto", "cto"),
    ("chief_technology_officer", "cto"),
    ("ceo", "ceo"),
    ("chief_executive_officer", "ceo"),
    ("security_officer", "security_officer"),
    ("compliance_officer", "compliance_officer"),
    // Tech & operations
    ("devops_engineer", "devops_engineer"),
    ("system_administrator", "system_administrator"),
    ("sysadmin", "system_administrator"),
    ("developer", "developer"),
    ("dev", "developer"),
    // Business roles
    ("finance_manager", "finance_manager"),
    ("product_manager", "product_manager"),
    ("operations_manager", "operations_manager"),
    ("data_analyst", "data_analyst"),
    ("analyst", "analyst"),
    ("support_engineer", "support_engineer"),
    ("auditor", "auditor"),
    // HR & viewer
    ("hr", "hr"),
    ("human_resources", "hr"),
    ("viewer", "viewer"),
    ("read_only", "viewer"),
    ("read-only", "viewer"),
    // Medical
    ("chief_medical_officer", "chief_medical_officer"),
    ("cmo", "chief_medical_officer"),
    ("medical_director", "medical_director"),
    ("attending_physician", "attending_physician"),
    ("consultant_physician", "consultant_physician"),
    ("resident_doctor", "resident_doctor"),
    ("surgeon", "surgeon"),
    ("nurse_practitioner", "nurse_practitioner"),
    ("clinical_admin", "clinical_admin"),
    ("radiologist", "radiologist"),
    ("pathologist", "pathologist"),
    ("lab_technician", "lab_technician"),
    ("laboratory_technician", "lab_technician"),
    ("pharmacist", "pharmacist"),
    ("medical_auditor", "medical_auditor"),
];

/// Surface-form → canonical data-field tag, in declaration order.
pub const DATA_FIELD_TABLE: &[(&str, &str)] = &[
    // Patient & clinical
    ("patient_record", "patient_record"),
    ("patient_records", "patient_record"),
    ("patient_trends", "patient_record"),
    ("patient_data", "patient_record"),
    ("health_record", "patient_record"),
    ("health_records", "patient_record"),
    ("medical_record", "patient_record"),
    ("medical_records", "patient_record"),
    ("clinical_data", "patient_record"),
    ("clinical_records", "patient_record"),
    ("diagnosis", "patient_record"),
    ("diagnosis_documents", "patient_record"),
    ("documents", "patient_record"),
    ("prescription", "prescription"),
    ("prescriptions", "prescription"),
    ("lab_result", "lab_result"),
    ("lab_results", "lab_result"),
    ("laboratory_result", "lab_result"),
    ("laboratory_results", "lab_result"),
    ("test_result", "lab_result"),
    ("test_results", "lab_result"),
    ("imaging_result", "imaging_result"),
    ("imaging_results", "imaging_result"),
    ("radiology_report", "imaging_result"),
    // Contact & identity
    ("phone_number", "phone_number"),
    ("phone_numbers", "phone_number"),
    ("telephone", "phone_number"),
    ("mobile_number", "phone_number"),
    ("email", "email"),
    ("emails", "email"),
    ("email_address", "email"),
    ("name", "name"),
    ("names", "name"),
    ("full_name", "name"),
    ("first_name", "name"),
    ("last_name", "name"),
    ("date_of_birth", "date_of_birth"),
    ("dob", "date_of_birth"),
    ("birth_date", "date_of_birth"),
    // Financial & identifiers
    ("card_number", "card_number"),
    ("card_numbers", "card_number"),
    ("credit_card", "card_number"),
    ("payment_card", "card_number"),
    ("national_id", "national_id"),
    ("national_ids", "national_id"),
    ("social_security", "national_id"),
    ("ssn", "national_id"),
    ("social_security_number", "national_id"),
    ("government_id", "national_id"),
    ("tax_id", "national_id"),
    // Location & demographics
    ("address", "address"),
    ("addresses", "address"),
    ("mailing_address", "address"),
    ("residential_address", "address"),
    ("demographics", "demographics"),
    ("demographic_data", "demographics"),
    // PII umbrella; filtered from final policies when assembling
    ("pii", "pii"),
    ("direct_identifiers", "pii"),
    ("identifiers", "pii"),
    ("personal_data", "pii"),
    ("personal_information", "pii"),
    ("sensitive_data", "pii"),
    ("confidential_data", "pii"),
    // Billing & claims
    ("billing", "billing"),
    ("billing_record", "billing"),
    ("billing_records", "billing"),
    ("billing_info", "billing"),
    ("claim", "claim"),
    ("claims", "claim"),
    ("insurance_claim", "claim"),
    ("insurance_claims", "claim"),
    ("financial_data", "financial_data"),
    ("financial_records", "financial_data"),
    ("payment_info", "financial_data"),
    ("insurance_info", "insurance_info"),
    ("insurance_information", "insurance_info"),
    ("coverage", "insurance_info"),
    // Audit & compliance
    ("audit_log", "audit_log"),
    ("audit_logs", "audit_log"),
    ("access_log", "audit_log"),
    ("access_logs", "audit_log"),
    ("compliance_record", "compliance_record"),
    ("compliance_records", "compliance_record"),
];

/// Surface-form → action, in declaration order.
///
/// Action extraction is first-match-wins over this table, so the order here is
/// load-bearing: "access" resolves to view before any read synonym is tried.
pub const ACTION_TABLE: &[(&str, PolicyAction)] = &[
    // view
    ("view", PolicyAction::View),
    ("access", PolicyAction::View),
    ("see", PolicyAction::View),
    ("browse", PolicyAction::View),
    ("inspect", PolicyAction::View),
    ("look_at", PolicyAction::View),
    ("open", PolicyAction::View),
    // read
    ("read", PolicyAction::Read),
    ("retrieve", PolicyAction::Read),
    ("fetch", PolicyAction::Read),
    ("load", PolicyAction::Read),
    ("query", PolicyAction::Read),
    ("export", PolicyAction::Read),
    ("download", PolicyAction::Read),
    // write
    ("write", PolicyAction::Write),
    ("create", PolicyAction::Write),
    ("add", PolicyAction::Write),
    ("insert", PolicyAction::Write),
    ("create_new", PolicyAction::Write),
    // edit
    ("edit", PolicyAction::Edit),
    ("modify", PolicyAction::Edit),
    ("change", PolicyAction::Edit),
    ("update", PolicyAction::Edit),
    ("alter", PolicyAction::Edit),
    // delete
    ("delete", PolicyAction::Delete),
    ("remove", PolicyAction::Delete),
    ("erase", PolicyAction::Delete),
    ("purge", PolicyAction::Delete),
    // tokenize
    ("tokenize", PolicyAction::Tokenize),
    ("tokenization", PolicyAction::Tokenize),
    ("mask", PolicyAction::Tokenize),
    ("anonymize", PolicyAction::Tokenize),
    ("pseudonymize", PolicyAction::Tokenize),
    // detokenize
    ("detokenize", PolicyAction::Detokenize),
    ("detokenization", PolicyAction::Detokenize),
    ("unmask", PolicyAction::Detokenize),
    ("reveal", PolicyAction::Detokenize),
    ("de_tokenize", PolicyAction::Detokenize),
    // analyze
    ("analyze", PolicyAction::Analyze),
    ("analysis", PolicyAction::Analyze),
    ("analytics", PolicyAction::Analyze),
    ("analyze_team", PolicyAction::Analyze),
    ("report", PolicyAction::Analyze),
    ("aggregate", PolicyAction::Analyze),
    ("run_analytics", PolicyAction::Analyze),
    ("run_reports", PolicyAction::Analyze),
];

/// Direct-identifier surface forms checked by the secondary restricted-field
/// pass, pre-resolved to canonical data-field tags.
///
/// "phone" has no data-field lexicon entry and deliberately passes through as
/// itself, preserving the broad-recall behavior of the original flows.
pub const DIRECT_IDENTIFIER_TABLE: &[(&str, &str)] = &[
    ("name", "name"),
    ("phone", "phone"),
    ("email", "email"),
    ("phone_number", "phone_number"),
    ("card_number", "card_number"),
    ("national_id", "national_id"),
    ("address", "address"),
];
