//! Message service

use uuid::Uuid;

use crate::{
    constants::MAX_MESSAGE_LENGTH,
    error::{AppError, AppResult},
    models::{Message, User},
    store::{
        RecordStore,
        repositories::{MessageRepository, UserRepository},
    },
};

/// Message service for direct messages between users
pub struct MessageService;

impl MessageService {
    /// Send a direct message
    pub fn send(
        store: &RecordStore,
        sender: &User,
        to_user_id: &Uuid,
        content: &str,
    ) -> AppResult<Message> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }
        if content.len() > MAX_MESSAGE_LENGTH {
            return Err(AppError::Validation("Message is too long".to_string()));
        }
        if UserRepository::find_by_id(store, to_user_id).is_none() {
            return Err(AppError::NotFound("Recipient not found".to_string()));
        }

        let message = MessageRepository::send(store, &sender.id, to_user_id, content)?;
        tracing::debug!(from = %sender.id, to = %to_user_id, "Message sent");

        Ok(message)
    }

    /// Both directions of the conversation with another user, oldest first
    pub fn conversation(store: &RecordStore, user: &User, other_id: &Uuid) -> Vec<Message> {
        MessageRepository::conversation(store, &user.id, other_id)
    }

    /// Every message sent to or from the user
    pub fn inbox_for(store: &RecordStore, user: &User) -> Vec<Message> {
        MessageRepository::for_user(store, &user.id)
    }

    /// Number of unread messages addressed to the user
    pub fn unread_count(store: &RecordStore, user: &User) -> usize {
        MessageRepository::unread_count(store, &user.id)
    }

    /// Mark a single message as read
    pub fn mark_read(store: &RecordStore, message_id: &Uuid) -> AppResult<()> {
        MessageRepository::mark_as_read(store, message_id)
    }

    /// Mark the user's whole inbox as read
    pub fn mark_all_read(store: &RecordStore, user: &User) -> AppResult<()> {
        MessageRepository::mark_all_read(store, &user.id)
    }
}
