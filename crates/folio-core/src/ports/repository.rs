use async_trait::async_trait;

use crate::domain::{Post, PostId, User, UserId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Implementations run each call against a single storage round trip. Callers
/// that need a check-then-write sequence to be atomic wrap the whole sequence
/// in the storage's transaction scope.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Check whether an entity with the given ID exists without loading it.
    async fn exists_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Load every entity, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity: insert when its id is unset, update otherwise.
    /// Returns the stored entity carrying its assigned id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, UserId> {
    /// Find a user by their email address (exact, case-sensitive match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// All posts owned by the given user.
    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, RepoError>;
}
