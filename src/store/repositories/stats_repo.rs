//! Statistics repository

use crate::{
    constants::collections,
    error::AppResult,
    models::Statistics,
    store::RecordStore,
    utils::time,
};

/// Partial update applied to the portal statistics document
#[derive(Debug, Clone, Default)]
pub struct StatisticsPatch {
    pub total_users: Option<u64>,
    pub active_users: Option<u64>,
    pub total_play_time: Option<u64>,
    pub server_uptime: Option<u64>,
}

/// Repository for the single portal statistics document
pub struct StatisticsRepository;

impl StatisticsRepository {
    /// Current statistics snapshot
    pub fn get(store: &RecordStore) -> Statistics {
        store.read(collections::STATISTICS)
    }

    /// Merge a patch and bump the last-updated stamp
    pub fn update(store: &RecordStore, patch: StatisticsPatch) -> AppResult<Statistics> {
        let mut stats = Self::get(store);

        if let Some(total_users) = patch.total_users {
            stats.total_users = total_users;
        }
        if let Some(active_users) = patch.active_users {
            stats.active_users = active_users;
        }
        if let Some(total_play_time) = patch.total_play_time {
            stats.total_play_time = total_play_time;
        }
        if let Some(server_uptime) = patch.server_uptime {
            stats.server_uptime = server_uptime;
        }
        stats.last_updated = time::now_utc();

        store.write(collections::STATISTICS, &stats)?;
        Ok(stats)
    }

    /// Accrue play time in minutes
    pub fn add_play_time(store: &RecordStore, minutes: u64) -> AppResult<Statistics> {
        let stats = Self::get(store);
        Self::update(
            store,
            StatisticsPatch {
                total_play_time: Some(stats.total_play_time + minutes),
                ..Default::default()
            },
        )
    }

    /// Record the current number of online users
    pub fn set_active_users(store: &RecordStore, count: u64) -> AppResult<Statistics> {
        Self::update(
            store,
            StatisticsPatch {
                active_users: Some(count),
                ..Default::default()
            },
        )
    }
}
