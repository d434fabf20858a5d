//! News service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{NewsItem, User},
    services::require_admin,
    store::{RecordStore, repositories::NewsRepository},
    utils::validation,
};

/// News service for the public feed and admin management
pub struct NewsService;

impl NewsService {
    /// Public feed, pinned items first
    pub fn feed(store: &RecordStore) -> Vec<NewsItem> {
        NewsRepository::all(store)
    }

    /// Get a news item by ID
    pub fn get(store: &RecordStore, id: &Uuid) -> AppResult<NewsItem> {
        NewsRepository::find_by_id(store, id)
            .ok_or_else(|| AppError::NotFound("News item not found".to_string()))
    }

    /// Publish a news item authored by the acting admin
    pub fn publish(
        store: &RecordStore,
        actor: &User,
        title: &str,
        content: &str,
        image: Option<&str>,
    ) -> AppResult<NewsItem> {
        require_admin(actor)?;

        let title = validation::validate_title(title)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;
        if content.trim().is_empty() {
            return Err(AppError::Validation("Content cannot be empty".to_string()));
        }

        let item = NewsRepository::create(store, &title, content, image, &actor.id, &actor.username)?;
        tracing::info!(admin = %actor.username, news_id = %item.id, "News item published");

        Ok(item)
    }

    /// Edit an existing news item
    pub fn edit(
        store: &RecordStore,
        actor: &User,
        id: &Uuid,
        title: Option<&str>,
        content: Option<&str>,
        image: Option<&str>,
    ) -> AppResult<NewsItem> {
        require_admin(actor)?;

        let title = match title {
            Some(raw) => Some(
                validation::validate_title(raw)
                    .map_err(|msg| AppError::Validation(msg.to_string()))?,
            ),
            None => None,
        };

        NewsRepository::update(store, id, title.as_deref(), content, image)
    }

    /// Remove a news item
    pub fn remove(store: &RecordStore, actor: &User, id: &Uuid) -> AppResult<()> {
        require_admin(actor)?;
        NewsRepository::delete(store, id)
    }

    /// Pin or unpin a news item
    pub fn toggle_pin(store: &RecordStore, actor: &User, id: &Uuid) -> AppResult<NewsItem> {
        require_admin(actor)?;
        NewsRepository::toggle_pin(store, id)
    }
}
