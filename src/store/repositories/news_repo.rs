//! News repository

use uuid::Uuid;

use crate::{
    constants::collections,
    error::{AppError, AppResult},
    models::NewsItem,
    store::RecordStore,
    utils::time,
};

/// Repository for news feed operations
pub struct NewsRepository;

impl NewsRepository {
    /// All news items, pinned first, newest first within each group
    pub fn all(store: &RecordStore) -> Vec<NewsItem> {
        let mut news: Vec<NewsItem> = store.read(collections::NEWS);
        news.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then(b.created_at.cmp(&a.created_at))
        });
        news
    }

    /// Find a news item by ID
    pub fn find_by_id(store: &RecordStore, id: &Uuid) -> Option<NewsItem> {
        let news: Vec<NewsItem> = store.read(collections::NEWS);
        news.into_iter().find(|item| item.id == *id)
    }

    /// Create a news item
    pub fn create(
        store: &RecordStore,
        title: &str,
        content: &str,
        image: Option<&str>,
        author_id: &Uuid,
        author_name: &str,
    ) -> AppResult<NewsItem> {
        let mut news: Vec<NewsItem> = store.read(collections::NEWS);

        let now = time::now_utc();
        let item = NewsItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            image: image.map(str::to_string),
            author_id: *author_id,
            author_name: author_name.to_string(),
            pinned: false,
            created_at: now,
            updated_at: now,
        };

        news.push(item.clone());
        store.write(collections::NEWS, &news)?;

        Ok(item)
    }

    /// Update a news item, bumping its updated timestamp
    pub fn update(
        store: &RecordStore,
        id: &Uuid,
        title: Option<&str>,
        content: Option<&str>,
        image: Option<&str>,
    ) -> AppResult<NewsItem> {
        let mut news: Vec<NewsItem> = store.read(collections::NEWS);
        let item = news
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| AppError::NotFound("News item not found".to_string()))?;

        if let Some(title) = title {
            item.title = title.to_string();
        }
        if let Some(content) = content {
            item.content = content.to_string();
        }
        if let Some(image) = image {
            item.image = Some(image.to_string());
        }
        item.updated_at = time::now_utc();

        let updated = item.clone();
        store.write(collections::NEWS, &news)?;

        Ok(updated)
    }

    /// Delete a news item
    pub fn delete(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        let news: Vec<NewsItem> = store.read(collections::NEWS);
        let news: Vec<NewsItem> = news.into_iter().filter(|item| item.id != *id).collect();
        store.write(collections::NEWS, &news)
    }

    /// Flip the pinned flag of a news item
    pub fn toggle_pin(store: &RecordStore, id: &Uuid) -> AppResult<NewsItem> {
        let mut news: Vec<NewsItem> = store.read(collections::NEWS);
        let item = news
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| AppError::NotFound("News item not found".to_string()))?;

        item.pinned = !item.pinned;

        let updated = item.clone();
        store.write(collections::NEWS, &news)?;

        Ok(updated)
    }
}
