use serde::{Deserialize, Serialize};
use std::fmt;

/// The action a policy grants on its data fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    /// View data in the UI.
    View,
    /// Read or export data programmatically.
    Read,
    /// Create new records.
    Write,
    /// Modify existing records.
    Edit,
    /// Remove records.
    Delete,
    /// Replace sensitive values with tokens.
    Tokenize,
    /// Resolve tokens back to the original values.
    Detokenize,
    /// Run aggregate analytics over the data.
    Analyze,
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyAction::View => "view",
            PolicyAction::Read => "read",
            PolicyAction::Write => "write",
            PolicyAction::Edit => "edit",
            PolicyAction::Delete => "delete",
            PolicyAction::Tokenize => "tokenize",
            PolicyAction::Detokenize => "detokenize",
            PolicyAction::Analyze => "analyze",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PolicyAction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(PolicyAction::View),
            "read" => Ok(PolicyAction::Read),
            "write" => Ok(PolicyAction::Write),
            "edit" => Ok(PolicyAction::Edit),
            "delete" => Ok(PolicyAction::Delete),
            "tokenize" => Ok(PolicyAction::Tokenize),
            "detokenize" => Ok(PolicyAction::Detokenize),
            "analyze" => Ok(PolicyAction::Analyze),
            _ => Err(format!("Invalid policy action: {s}")),
        }
    }
}

/// Data transformation applied by a policy; derived, never specified directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTransformation {
    /// Sensitive values are replaced with tokens.
    Tokenization,
    /// Tokens are resolved back to the original values.
    Detokenization,
    /// Values are encrypted at rest or in transit.
    Encryption,
    /// Values are partially hidden.
    Masked,
    /// Only aggregate views are exposed.
    Aggregated,
    /// Values pass through unchanged.
    None,
}

impl fmt::Display for DataTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataTransformation::Tokenization => "tokenization",
            DataTransformation::Detokenization => "detokenization",
            DataTransformation::Encryption => "encryption",
            DataTransformation::Masked => "masked",
            DataTransformation::Aggregated => "aggregated",
            DataTransformation::None => "none",
        };
        write!(f, "{s}")
    }
}

/// Restriction category recorded in a policy's summary list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    /// Named identifier fields are excluded from access.
    RestrictIdentifiers,
    /// Access expires after a fixed duration.
    TimeLimited,
    /// Access applies only under a situational qualifier.
    Conditional,
}

/// Recognized situational qualifier narrowing when a policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalAccess {
    /// Access only during an active consultation session.
    ActiveConsultationSession,
    /// Access only for treatment purposes.
    TreatmentPurposesOnly,
    /// Access only for claim validation.
    ClaimValidationOnly,
    /// Access only during business hours.
    BusinessHours,
}

/// Unit of a policy's time restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Duration measured in hours.
    Hours,
    /// Duration measured in days.
    Days,
    /// Duration measured in minutes.
    Minutes,
}

/// How long a policy grant remains valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRestriction {
    /// Number of units before the grant expires.
    pub duration: u32,
    /// Unit the duration is measured in.
    pub unit: TimeUnit,
}

/// A structured policy assembled from a natural-language request.
///
/// Optional fields are omitted from the JSON form entirely when the
/// underlying extraction found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPolicy {
    /// Canonical role tags the policy grants access to; never empty.
    pub role: Vec<String>,
    /// Canonical data-field tags covered by the grant; never empty.
    pub data_field: Vec<String>,
    /// The single action the policy permits.
    pub action: PolicyAction,
    /// Transformation applied to the data, inferred from action and text cues.
    pub data_transformation: DataTransformation,
    /// Restriction summary, present only when at least one trigger fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<RestrictionKind>>,
    /// Fields explicitly excluded from the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_fields: Option<Vec<String>>,
    /// Expiry of the grant, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_restriction: Option<TimeRestriction>,
    /// Situational qualifier narrowing when the grant applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_access: Option<ConditionalAccess>,
}

impl GeneratedPolicy {
    /// The safe-default policy returned for empty or whitespace-only input.
    pub fn fallback() -> Self {
        GeneratedPolicy {
            role: vec!["admin".to_string()],
            data_field: vec!["patient_record".to_string()],
            action: PolicyAction::View,
            data_transformation: DataTransformation::None,
            restrictions: None,
            restricted_fields: None,
            time_restriction: None,
            conditional_access: None,
        }
    }
}
