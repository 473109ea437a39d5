use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bounty record as the external store hands it out. Read-only here - the
/// store owns the lifecycle, this server only derives views from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounty {
    pub id: String,
    pub status: BountyStatus,
    pub claimed_by: Option<String>,
    pub issue_title: String,
    pub project_name: String,
    pub project_logo_url: Option<String>,
    /// Free-form source value, normalized in the completion record derivation.
    pub difficulty: Option<String>,
    pub reward_amount: Option<f64>,
    pub reward_currency: String,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BountyStatus {
    Open,
    Claimed,
    Closed,
    #[serde(other)]
    Unknown,
}

impl Bounty {
    pub fn is_completed_by(&self, user_id: &str) -> bool {
        self.status == BountyStatus::Closed && self.claimed_by.as_deref() == Some(user_id)
    }
}
