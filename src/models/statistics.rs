//! Portal statistics model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate portal statistics shown on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_users: u64,
    pub active_users: u64,
    /// Accumulated play time in minutes
    pub total_play_time: u64,
    /// Game server uptime in seconds, pushed by an external job
    pub server_uptime: u64,
    pub last_updated: DateTime<Utc>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_users: 0,
            active_users: 0,
            total_play_time: 0,
            server_uptime: 0,
            last_updated: Utc::now(),
        }
    }
}
