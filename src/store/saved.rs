use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::policy::GeneratedPolicy;

/// A generated policy committed by the user. Immutable once saved; there is no
/// update-in-place, only deletion by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPolicyItem {
    /// Unique random identifier.
    pub id: String,
    /// The structured policy, flattened into the record.
    #[serde(flatten)]
    pub policy: GeneratedPolicy,
    /// When the policy was saved, serialized as an ISO-8601 timestamp.
    pub created_at: DateTime<Utc>,
    /// The original natural-language request.
    pub nlp_text: String,
}

impl SavedPolicyItem {
    /// Wrap a generated policy for persistence, stamping id and creation time.
    pub fn new(policy: GeneratedPolicy, nlp_text: &str) -> Self {
        SavedPolicyItem {
            id: Uuid::new_v4().to_string(),
            policy,
            created_at: Utc::now(),
            nlp_text: nlp_text.trim().to_string(),
        }
    }
}
