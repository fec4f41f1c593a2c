use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::policy::{GeneratedPolicy, PolicyAction};

/// Risk tier derived from a generated policy; recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score of 2 or lower.
    Low,
    /// Score of 3 or 4.
    Medium,
    /// Score of 5 or higher.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

/// Heuristic integer score combining action severity, field sensitivity, role
/// breadth, and mitigating restrictions. Unbounded and deliberately unclamped:
/// heavily mitigated policies can go negative.
pub fn risk_score(policy: &GeneratedPolicy) -> i32 {
    let mut score = 0;

    score += match policy.action {
        PolicyAction::Delete | PolicyAction::Write | PolicyAction::Edit => 3,
        PolicyAction::Detokenize => 2,
        PolicyAction::View | PolicyAction::Read => 1,
        PolicyAction::Analyze | PolicyAction::Tokenize => 1,
    };

    if policy
        .data_field
        .iter()
        .any(|f| f == "pii" || f == "national_id" || f == "card_number")
    {
        score += 2;
    }
    if policy.role.iter().any(|r| r == "admin") {
        score += 1;
    }
    if policy.restrictions.as_ref().is_none_or(Vec::is_empty) {
        score += 1;
    }
    if policy
        .restricted_fields
        .as_ref()
        .is_some_and(|fields| !fields.is_empty())
    {
        score -= 1;
    }
    if policy.time_restriction.is_some() {
        score -= 1;
    }
    if policy.conditional_access.is_some() {
        score -= 1;
    }

    score
}

/// Map a policy's heuristic score to its three-tier risk level.
pub fn assess_risk(policy: &GeneratedPolicy) -> RiskLevel {
    let score = risk_score(policy);
    if score <= 2 {
        RiskLevel::Low
    } else if score <= 4 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
