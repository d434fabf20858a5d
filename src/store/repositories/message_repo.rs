//! Message repository

use uuid::Uuid;

use crate::{
    constants::collections,
    error::AppResult,
    models::Message,
    store::RecordStore,
    utils::time,
};

/// Repository for direct message operations
pub struct MessageRepository;

impl MessageRepository {
    /// All messages
    pub fn all(store: &RecordStore) -> Vec<Message> {
        store.read(collections::MESSAGES)
    }

    /// Both directions of a two-user conversation, oldest first
    pub fn conversation(store: &RecordStore, user_a: &Uuid, user_b: &Uuid) -> Vec<Message> {
        let mut messages: Vec<Message> = Self::all(store)
            .into_iter()
            .filter(|msg| {
                (msg.from_user_id == *user_a && msg.to_user_id == *user_b)
                    || (msg.from_user_id == *user_b && msg.to_user_id == *user_a)
            })
            .collect();
        messages.sort_by_key(|msg| msg.created_at);
        messages
    }

    /// Every message sent to or from a user
    pub fn for_user(store: &RecordStore, user_id: &Uuid) -> Vec<Message> {
        Self::all(store)
            .into_iter()
            .filter(|msg| msg.to_user_id == *user_id || msg.from_user_id == *user_id)
            .collect()
    }

    /// Number of unread messages addressed to a user
    pub fn unread_count(store: &RecordStore, user_id: &Uuid) -> usize {
        Self::all(store)
            .iter()
            .filter(|msg| msg.to_user_id == *user_id && !msg.is_read)
            .count()
    }

    /// Append a new message
    pub fn send(
        store: &RecordStore,
        from_user_id: &Uuid,
        to_user_id: &Uuid,
        content: &str,
    ) -> AppResult<Message> {
        let mut messages = Self::all(store);

        let message = Message {
            id: Uuid::new_v4(),
            from_user_id: *from_user_id,
            to_user_id: *to_user_id,
            content: content.to_string(),
            created_at: time::now_utc(),
            is_read: false,
        };

        messages.push(message.clone());
        store.write(collections::MESSAGES, &messages)?;

        Ok(message)
    }

    /// Mark a single message as read
    ///
    /// Unknown ids are ignored, matching the lenient read path.
    pub fn mark_as_read(store: &RecordStore, message_id: &Uuid) -> AppResult<()> {
        let mut messages = Self::all(store);

        if let Some(message) = messages.iter_mut().find(|msg| msg.id == *message_id) {
            message.is_read = true;
            store.write(collections::MESSAGES, &messages)?;
        }

        Ok(())
    }

    /// Mark every unread message addressed to a user as read
    pub fn mark_all_read(store: &RecordStore, user_id: &Uuid) -> AppResult<()> {
        let mut messages = Self::all(store);
        let mut changed = false;

        for message in messages.iter_mut() {
            if message.to_user_id == *user_id && !message.is_read {
                message.is_read = true;
                changed = true;
            }
        }

        if changed {
            store.write(collections::MESSAGES, &messages)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    fn open_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            pretty: false,
        };
        let store = RecordStore::open(&config).unwrap();
        (dir, store)
    }

    #[test]
    fn test_conversation_includes_both_directions_in_order() {
        let (_dir, store) = open_store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let carol = Uuid::new_v4();

        MessageRepository::send(&store, &alice, &bob, "hey").unwrap();
        MessageRepository::send(&store, &bob, &alice, "hi").unwrap();
        MessageRepository::send(&store, &alice, &carol, "unrelated").unwrap();

        let conversation = MessageRepository::conversation(&store, &alice, &bob);
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[0].content, "hey");
        assert_eq!(conversation[1].content, "hi");
    }

    #[test]
    fn test_unread_count_and_mark_all_read() {
        let (_dir, store) = open_store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        MessageRepository::send(&store, &alice, &bob, "one").unwrap();
        MessageRepository::send(&store, &alice, &bob, "two").unwrap();
        assert_eq!(MessageRepository::unread_count(&store, &bob), 2);
        // Sender's inbox is unaffected
        assert_eq!(MessageRepository::unread_count(&store, &alice), 0);

        MessageRepository::mark_all_read(&store, &bob).unwrap();
        assert_eq!(MessageRepository::unread_count(&store, &bob), 0);
    }

    #[test]
    fn test_mark_single_message_read() {
        let (_dir, store) = open_store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let message = MessageRepository::send(&store, &alice, &bob, "hello").unwrap();
        MessageRepository::mark_as_read(&store, &message.id).unwrap();

        assert_eq!(MessageRepository::unread_count(&store, &bob), 0);
    }
}
