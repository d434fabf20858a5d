//! News feed model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published news item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Optional header image URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    pub author_id: Uuid,
    pub author_name: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
