//! User model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time;

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never the plaintext password
    pub password_hash: String,
    pub level: u32,
    pub hours_played: u32,
    pub achievement_points: u32,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
    #[serde(rename = "banInfo", skip_serializing_if = "Option::is_none", default)]
    pub ban: Option<BanRecord>,
}

impl User {
    /// The ban currently in force against this account, if any
    ///
    /// A ban whose expiry date has passed is not in force; it stays on the
    /// record until the next login or session restore clears it.
    pub fn active_ban(&self) -> Option<&BanRecord> {
        self.ban.as_ref().filter(|ban| ban.is_active())
    }
}

/// Moderation action attached to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanRecord {
    /// Username of the admin who issued the ban
    pub banned_by: String,
    pub reason: String,
    pub ban_date: DateTime<Utc>,
    /// Absent means permanent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl BanRecord {
    /// Check whether the ban is currently in force
    pub fn is_active(&self) -> bool {
        match self.expiry_date {
            Some(expiry) => !time::is_past(expiry),
            None => true,
        }
    }

    /// Check whether the ban has no expiry date
    pub fn is_permanent(&self) -> bool {
        self.expiry_date.is_none()
    }

    /// Time left until the ban lapses, if it has an expiry in the future
    pub fn remaining(&self) -> Option<Duration> {
        self.expiry_date.and_then(time::time_until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ban(expiry: Option<DateTime<Utc>>) -> BanRecord {
        BanRecord {
            banned_by: "root".to_string(),
            reason: "cheating".to_string(),
            ban_date: Utc::now(),
            expiry_date: expiry,
        }
    }

    #[test]
    fn test_permanent_ban_is_active() {
        let record = ban(None);
        assert!(record.is_active());
        assert!(record.is_permanent());
        assert!(record.remaining().is_none());
    }

    #[test]
    fn test_future_expiry_is_active() {
        let record = ban(Some(Utc::now() + Duration::hours(1)));
        assert!(record.is_active());
        assert!(record.remaining().is_some());
    }

    #[test]
    fn test_past_expiry_is_lapsed() {
        let record = ban(Some(Utc::now() - Duration::hours(1)));
        assert!(!record.is_active());
        assert!(record.remaining().is_none());
    }

    #[test]
    fn test_active_ban_ignores_lapsed_records() {
        let mut user: User = serde_json::from_value(serde_json::json!({
            "id": "7b9c6a74-55a5-4f9c-9c75-3a1c6f1f1f11",
            "username": "bob",
            "email": "bob@example.com",
            "passwordHash": "x",
            "level": 1,
            "hoursPlayed": 0,
            "achievementPoints": 0,
            "isVIP": false,
            "isAdmin": false,
            "createdAt": "2024-01-15T12:00:00Z",
            "lastLoginAt": "2024-01-15T12:00:00Z"
        }))
        .unwrap();
        assert!(user.active_ban().is_none());

        user.ban = Some(ban(Some(Utc::now() - Duration::hours(1))));
        assert!(user.active_ban().is_none());

        user.ban = Some(ban(None));
        assert!(user.active_ban().is_some());
    }

    #[test]
    fn test_ban_record_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ban(None)).unwrap();
        assert!(json.get("bannedBy").is_some());
        assert!(json.get("banDate").is_some());
        // Permanent bans omit the expiry key entirely
        assert!(json.get("expiryDate").is_none());
    }
}
