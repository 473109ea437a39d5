use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::bounty::bounty_entity::Bounty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Unrecognized or absent source values fall back to Beginner.
    pub fn from_source(value: &str) -> Self {
        match value {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }
}

/// Completion record derived from a closed, claimed bounty. Computed per
/// request and never persisted; a pure function of a single bounty record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub id: String,
    pub bounty_id: String,
    pub bounty_title: String,
    pub project_name: String,
    pub project_logo_url: Option<String>,
    pub difficulty: Difficulty,
    pub reward_amount: f64,
    pub reward_currency: String,
    pub claimed_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub completion_time_hours: i64,
    /// Not derivable from bounty data alone, always null at this layer.
    pub maintainer_rating: Option<f64>,
    pub maintainer_feedback: Option<String>,
    /// Not derivable at this layer, always 0.
    pub points_earned: i64,
}

impl CompletionRecord {
    pub fn from_bounty(bounty: &Bounty) -> Self {
        let difficulty = bounty
            .difficulty
            .as_deref()
            .map(Difficulty::from_source)
            .unwrap_or(Difficulty::Beginner);

        // the closing mutation is assumed to be the last update
        let claimed_at = bounty.claimed_at.unwrap_or(bounty.created_at);
        let completed_at = bounty.updated_at;
        // clamped so clock skew can't produce a negative duration
        let completion_time_hours =
            (((completed_at - claimed_at).num_seconds() as f64) / 3600.0).round() as i64;
        let completion_time_hours = completion_time_hours.max(0);

        CompletionRecord {
            id: format!("completion-{}", bounty.id),
            bounty_id: bounty.id.clone(),
            bounty_title: bounty.issue_title.clone(),
            project_name: bounty.project_name.clone(),
            project_logo_url: bounty.project_logo_url.clone(),
            difficulty,
            reward_amount: bounty.reward_amount.unwrap_or(0.0),
            reward_currency: bounty.reward_currency.clone(),
            claimed_at,
            completed_at,
            completion_time_hours,
            maintainer_rating: None,
            maintainer_feedback: None,
            points_earned: 0,
        }
    }
}
