use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, UserId};
use crate::error::DomainError;

/// Post entity - an article written by exactly one user.
///
/// `user_id` is fixed when the post is created and is never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not yet persisted post owned by `user_id`.
    pub fn new(user_id: UserId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content. The owner stays untouched.
    pub fn revise(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

pub fn validate_post_fields(title: &str, content: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("Title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(DomainError::Validation("Content is required".to_string()));
    }
    Ok(())
}
