//! In-memory repositories for service tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;

use skillx_common::auth::{hash_password, JwtService};
use skillx_core::entities::{ConnectionRequest, ConnectionStatus, Message, NewMessage, NewUser, User, UserSearch};
use skillx_core::traits::{ConnectionRepository, MessageRepository, RepoResult, UserRepository};
use skillx_core::{DomainError, Id};

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const PASSWORD: &str = "Tr1cky-Lantern";

/// Argon2 is slow in debug builds; hash the shared test password once.
fn password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(PASSWORD).unwrap())
}

/// One store implementing every repository so that user deletion cascades.
#[derive(Default)]
pub struct MemoryStore {
    next_id: AtomicI64,
    users: RwLock<Vec<(User, String)>>,
    connections: RwLock<Vec<ConnectionRequest>>,
    messages: RwLock<Vec<Message>>,
}

impl MemoryStore {
    fn next_id(&self) -> Id {
        Id::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Insert a user whose password is [`PASSWORD`]
    pub fn add_user(&self, username: &str, skills_have: Option<&str>) -> User {
        let mut user = User::new(
            self.next_id(),
            username.to_string(),
            format!("{username}@example.com"),
        );
        user.skills_have = skills_have.map(String::from);
        self.users
            .write()
            .push((user.clone(), password_hash().to_string()));
        user
    }

    pub fn message_count(&self) -> usize {
        self.messages.read().len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.read().len()
    }
}

/// Build a context backed by a fresh store
pub fn context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .connection_repo(store.clone())
        .message_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600, 86400)))
        .build()
        .unwrap();
    (ctx, store)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .filter(|(u, _)| ids.contains(&u.id))
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str, exclude: Option<Id>) -> RepoResult<bool> {
        Ok(self
            .users
            .read()
            .iter()
            .any(|(u, _)| u.username == username && Some(u.id) != exclude))
    }

    async fn email_exists(&self, email: &str, exclude: Option<Id>) -> RepoResult<bool> {
        Ok(self
            .users
            .read()
            .iter()
            .any(|(u, _)| u.email.eq_ignore_ascii_case(email) && Some(u.id) != exclude))
    }

    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut users = self.users.write();
        if users.iter().any(|(u, _)| u.username == new_user.username) {
            return Err(DomainError::UsernameTaken);
        }
        let mut user = User::new(self.next_id(), new_user.username.clone(), new_user.email.clone());
        user.bio.clone_from(&new_user.bio);
        user.skills_have.clone_from(&new_user.skills_have);
        user.skills_want.clone_from(&new_user.skills_want);
        users.push((user.clone(), password_hash.to_string()));
        Ok(user)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.write();
        let (stored, _) = users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|(u, _)| u.id != id);
        if users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        self.connections.write().retain(|c| !c.involves(id));
        self.messages.write().retain(|m| !m.involves(id));
        Ok(())
    }

    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }

    async fn list_discoverable(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let connections = self.connections.read();
        Ok(self
            .users
            .read()
            .iter()
            .filter(|(u, _)| u.id != user_id)
            .filter(|(u, _)| {
                !connections
                    .iter()
                    .any(|c| c.is_accepted() && c.connects(u.id, user_id))
            })
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn search(&self, exclude: Id, search: &UserSearch) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .iter()
            .filter(|(u, _)| u.id != exclude && search.matches(u))
            .map(|(u, _)| u.clone())
            .collect())
    }
}

#[async_trait]
impl ConnectionRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConnectionRequest>> {
        Ok(self.connections.read().iter().find(|c| c.id == id).cloned())
    }

    async fn find_pending_for_receiver(
        &self,
        id: Id,
        receiver_id: Id,
    ) -> RepoResult<Option<ConnectionRequest>> {
        Ok(self
            .connections
            .read()
            .iter()
            .find(|c| c.id == id && c.awaits(receiver_id))
            .cloned())
    }

    async fn accepted_exists_between(&self, a: Id, b: Id) -> RepoResult<bool> {
        Ok(self
            .connections
            .read()
            .iter()
            .any(|c| c.is_accepted() && c.connects(a, b)))
    }

    async fn pending_exists(&self, sender_id: Id, receiver_id: Id) -> RepoResult<bool> {
        Ok(self
            .connections
            .read()
            .iter()
            .any(|c| c.is_pending() && c.sender_id == sender_id && c.receiver_id == receiver_id))
    }

    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<ConnectionRequest> {
        let request = ConnectionRequest::new(self.next_id(), sender_id, receiver_id);
        self.connections.write().push(request.clone());
        Ok(request)
    }

    async fn mark_accepted(&self, id: Id) -> RepoResult<()> {
        let mut connections = self.connections.write();
        let request = connections
            .iter_mut()
            .find(|c| c.id == id && c.is_pending())
            .ok_or(DomainError::ConnectionRequestNotFound(id))?;
        request.status = ConnectionStatus::Accepted;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut connections = self.connections.write();
        let before = connections.len();
        connections.retain(|c| c.id != id);
        if connections.len() == before {
            return Err(DomainError::ConnectionNotFound(id));
        }
        Ok(())
    }

    async fn find_accepted_for(&self, user_id: Id) -> RepoResult<Vec<ConnectionRequest>> {
        Ok(self
            .connections
            .read()
            .iter()
            .rev()
            .filter(|c| c.is_accepted() && c.involves(user_id))
            .cloned()
            .collect())
    }

    async fn find_pending_for(&self, receiver_id: Id) -> RepoResult<Vec<ConnectionRequest>> {
        Ok(self
            .connections
            .read()
            .iter()
            .rev()
            .filter(|c| c.awaits(receiver_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let id = self.next_id();
        let mut stored = Message::new(id, message.sender_id, message.receiver_id, message.content.clone());
        // keep timestamps strictly increasing within a test
        stored.timestamp = Utc::now() + Duration::milliseconds(id.into_inner());
        self.messages.write().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Message>> {
        Ok(self.messages.read().iter().find(|m| m.id == id).cloned())
    }

    async fn find_involving(&self, user_id: Id) -> RepoResult<Vec<Message>> {
        Ok(self
            .messages
            .read()
            .iter()
            .filter(|m| m.involves(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        let mut messages = self.messages.write();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(DomainError::MessageNotFound(id));
        }
        Ok(())
    }

    async fn delete_between(&self, a: Id, b: Id) -> RepoResult<u64> {
        let mut messages = self.messages.write();
        let before = messages.len();
        messages.retain(|m| !(m.involves(a) && m.involves(b)));
        Ok((before - messages.len()) as u64)
    }

    async fn mark_read_from(&self, sender_id: Id, receiver_id: Id) -> RepoResult<u64> {
        let mut updated = 0;
        for message in self.messages.write().iter_mut() {
            if message.sender_id == sender_id && message.mark_read_by(receiver_id) {
                updated += 1;
            }
        }
        Ok(updated)
    }
}
