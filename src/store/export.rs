use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::policy::{
    ConditionalAccess, DataTransformation, PolicyAction, RestrictionKind, TimeRestriction,
};
use crate::store::saved::SavedPolicyItem;

/// Fixed projection of a saved policy for clipboard-style export.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyExport {
    /// Canonical role tags.
    pub role: Vec<String>,
    /// Canonical data-field tags.
    pub data_field: Vec<String>,
    /// Granted action.
    pub action: PolicyAction,
    /// Applied transformation.
    pub data_transformation: DataTransformation,
    /// Restriction summary, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<RestrictionKind>>,
    /// Explicitly excluded fields, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_fields: Option<Vec<String>>,
    /// Grant expiry, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_restriction: Option<TimeRestriction>,
    /// Situational qualifier, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_access: Option<ConditionalAccess>,
    /// When the policy was saved.
    pub created_at: DateTime<Utc>,
    /// The original natural-language request.
    pub nlp_text: String,
}

impl From<&SavedPolicyItem> for PolicyExport {
    fn from(item: &SavedPolicyItem) -> Self {
        PolicyExport {
            role: item.policy.role.clone(),
            data_field: item.policy.data_field.clone(),
            action: item.policy.action,
            data_transformation: item.policy.data_transformation,
            restrictions: item.policy.restrictions.clone(),
            restricted_fields: item.policy.restricted_fields.clone(),
            time_restriction: item.policy.time_restriction,
            conditional_access: item.policy.conditional_access,
            created_at: item.created_at,
            nlp_text: item.nlp_text.clone(),
        }
    }
}

/// Serialize a saved policy's export projection as pretty-printed JSON.
pub fn export_pretty(item: &SavedPolicyItem) -> Result<String, String> {
    serde_json::to_string_pretty(&PolicyExport::from(item))
        .map_err(|e| format!("Failed to serialize policy export: {e}"))
}
