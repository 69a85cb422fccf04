//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Filters are by sender, receiver and status.

use async_trait::async_trait;

use crate::entities::{ConnectionRequest, Message, NewMessage, NewUser, User, UserSearch};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find several users at once; missing ids are skipped
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is taken by anyone other than `exclude`
    async fn username_exists(&self, username: &str, exclude: Option<Id>) -> RepoResult<bool>;

    /// Check if an email is taken by anyone other than `exclude`
    async fn email_exists(&self, email: &str, exclude: Option<Id>) -> RepoResult<bool>;

    /// Create a new user and return it with its assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user. Connection requests and messages cascade.
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>>;

    /// All users except `user_id` and those with an accepted connection to them
    async fn list_discoverable(&self, user_id: Id) -> RepoResult<Vec<User>>;

    /// Users other than `exclude` matching the search filter
    async fn search(&self, exclude: Id, search: &UserSearch) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Connection Repository
// ============================================================================

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Find a request by ID regardless of status
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConnectionRequest>>;

    /// Find a pending request with this id addressed to `receiver_id`
    async fn find_pending_for_receiver(
        &self,
        id: Id,
        receiver_id: Id,
    ) -> RepoResult<Option<ConnectionRequest>>;

    /// Check for an accepted edge between the two users, either direction
    async fn accepted_exists_between(&self, a: Id, b: Id) -> RepoResult<bool>;

    /// Check for a pending edge from sender to receiver (one direction only)
    async fn pending_exists(&self, sender_id: Id, receiver_id: Id) -> RepoResult<bool>;

    /// Create a pending request
    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<ConnectionRequest>;

    /// Transition a request to accepted
    async fn mark_accepted(&self, id: Id) -> RepoResult<()>;

    /// Delete a request regardless of status
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Accepted edges where the user is sender or receiver
    async fn find_accepted_for(&self, user_id: Id) -> RepoResult<Vec<ConnectionRequest>>;

    /// Pending edges addressed to the user
    async fn find_pending_for(&self, receiver_id: Id) -> RepoResult<Vec<ConnectionRequest>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a message; the datastore assigns id and timestamp
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Find message by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Message>>;

    /// Every message the user sent or received, oldest first
    async fn find_involving(&self, user_id: Id) -> RepoResult<Vec<Message>>;

    /// Delete a single message
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Delete all messages between two users in both directions
    async fn delete_between(&self, a: Id, b: Id) -> RepoResult<u64>;

    /// Mark every unread message from `sender_id` to `receiver_id` as read
    async fn mark_read_from(&self, sender_id: Id, receiver_id: Id) -> RepoResult<u64>;
}
