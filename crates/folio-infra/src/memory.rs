//! In-memory repositories - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::domain::{Post, User, UserId, id_is_set};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, PostRepository, UserRepository};

/// An entity the in-memory store can keep.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    fn assign_id(&mut self, id: i64);

    /// Mirrors a unique index: true when `self` may not coexist with `other`.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

impl StoredRecord for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl StoredRecord for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Arena-style store keyed by id, behind an async RwLock.
///
/// Ids come from a counter starting at 1 and are never reused, so iteration
/// order is insertion order. Data is lost on process restart.
pub struct InMemoryRepository<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: StoredRecord> BaseRepository<T, i64> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        // Uniqueness check and write share one write lock.
        let mut rows = self.rows.write().await;

        let updating = id_is_set(entity.id());
        if updating && !rows.contains_key(&entity.id()) {
            return Err(RepoError::NotFound);
        }
        if rows
            .values()
            .any(|row| row.id() != entity.id() && entity.conflicts_with(row))
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        if !updating {
            entity.assign_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        }
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|user| user.email == email).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect())
    }
}
