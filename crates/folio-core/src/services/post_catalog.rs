//! Post catalog - post CRUD with owner validation against the user store.

use std::sync::Arc;

use crate::domain::{Post, PostId, UserId, require_id, validate_post_fields};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::{PostRepository, UserRepository};

/// Owns post records. Needs the user store only to check that an owner
/// exists; it never writes users.
pub struct PostCatalog {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostCatalog {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Publish a post for `owner_id`.
    ///
    /// Fails with `NotFound` when the owner does not exist; nothing is
    /// persisted in that case.
    pub async fn create(&self, owner_id: UserId, title: &str, content: &str) -> DomainResult<Post> {
        tracing::info!(user_id = owner_id, title, "Creating post");
        let owner_id = require_id(owner_id, "User")?;
        validate_post_fields(title, content)?;

        let Some(owner) = self.users.find_by_id(owner_id).await? else {
            tracing::warn!(user_id = owner_id, "Cannot create post for unknown user");
            return Err(DomainError::NotFound {
                entity_type: "User",
                id: owner_id,
            });
        };

        let post = Post::new(owner.id, title.to_string(), content.to_string());
        let saved = self.posts.save(post).await.map_err(log_failure)?;

        tracing::info!(post_id = saved.id, user_id = owner_id, "Post created");
        Ok(saved)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Post>> {
        tracing::info!("Fetching all posts");
        Ok(self.posts.find_all().await.map_err(log_failure)?)
    }

    pub async fn get_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        tracing::info!(post_id = id, "Fetching post");
        let id = require_id(id, "Post")?;
        Ok(self.posts.find_by_id(id).await.map_err(log_failure)?)
    }

    /// All posts of one owner. An unknown owner is an error, not an empty list.
    pub async fn get_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<Post>> {
        tracing::info!(user_id = owner_id, "Fetching posts for user");
        let owner_id = require_id(owner_id, "User")?;

        if !self.users.exists_by_id(owner_id).await? {
            tracing::warn!(user_id = owner_id, "Posts requested for unknown user");
            return Err(DomainError::NotFound {
                entity_type: "User",
                id: owner_id,
            });
        }

        Ok(self
            .posts
            .find_all_by_user_id(owner_id)
            .await
            .map_err(log_failure)?)
    }

    /// Replace title and content of an existing post. The owner is immutable.
    pub async fn update(&self, id: PostId, title: &str, content: &str) -> DomainResult<Option<Post>> {
        tracing::info!(post_id = id, "Updating post");
        let id = require_id(id, "Post")?;
        validate_post_fields(title, content)?;

        let Some(mut post) = self.posts.find_by_id(id).await? else {
            tracing::warn!(post_id = id, "Post not found for update");
            return Ok(None);
        };

        post.revise(title.to_string(), content.to_string());
        let updated = self.posts.save(post).await.map_err(log_failure)?;

        tracing::info!(post_id = updated.id, "Post updated");
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: PostId) -> DomainResult<bool> {
        tracing::info!(post_id = id, "Deleting post");
        let id = require_id(id, "Post")?;

        if !self.posts.exists_by_id(id).await? {
            tracing::warn!(post_id = id, "Post not found for deletion");
            return Ok(false);
        }

        match self.posts.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                Ok(true)
            }
            Err(RepoError::NotFound) => Ok(false),
            Err(e) => Err(log_failure(e).into()),
        }
    }
}

fn log_failure(err: RepoError) -> RepoError {
    tracing::error!(error = %err, "Post storage failure");
    err
}
