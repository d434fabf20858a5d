//! Player report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report filed by a player (bug, player complaint, or suggestion)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    /// One of `constants::report_kinds`
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    /// One of `constants::report_priorities`
    pub priority: String,
    /// One of `constants::report_statuses`
    pub status: String,
    pub comments: Vec<ReportComment>,
    /// Not yet seen by an admin
    #[serde(default)]
    pub is_new: bool,
    /// Carries comments the reporter has not yet seen
    #[serde(default)]
    pub has_new_comments: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment left on a report by an admin or the reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportComment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
