//! User directory - user CRUD with email uniqueness.

use std::sync::Arc;

use crate::domain::{User, UserId, mask_email, require_id, validate_user_fields};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::UserRepository;

/// Owns user records. Emails are compared exactly, so addresses that differ
/// only in letter case are distinct.
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new user.
    ///
    /// Fails with `DuplicateEmail` if any user already holds `email`.
    pub async fn create(&self, name: &str, email: &str) -> DomainResult<User> {
        tracing::info!(email = %mask_email(email), "Creating user");
        validate_user_fields(name, email)?;

        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!(email = %mask_email(email), "Email already registered");
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        let user = User::new(name.to_string(), email.to_string());
        let saved = self
            .users
            .save(user)
            .await
            .map_err(|e| duplicate_on_constraint(e, email))?;

        tracing::info!(user_id = saved.id, "User created");
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        tracing::info!(user_id = id, "Fetching user");
        let id = require_id(id, "User")?;
        Ok(self.users.find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<User>> {
        tracing::info!("Fetching all users");
        Ok(self.users.find_all().await?)
    }

    /// Overwrite name and email of an existing user.
    ///
    /// Returns `None` when no user has `id`. Keeping the current email is
    /// always allowed; switching to one held by another user is not.
    pub async fn update(&self, id: UserId, name: &str, email: &str) -> DomainResult<Option<User>> {
        tracing::info!(user_id = id, "Updating user");
        let id = require_id(id, "User")?;
        validate_user_fields(name, email)?;

        let Some(mut user) = self.users.find_by_id(id).await? else {
            tracing::warn!(user_id = id, "User not found for update");
            return Ok(None);
        };

        if user.email != email && self.users.find_by_email(email).await?.is_some() {
            tracing::warn!(user_id = id, email = %mask_email(email), "Email already registered");
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        user.rename(name.to_string(), email.to_string());
        let updated = self
            .users
            .save(user)
            .await
            .map_err(|e| duplicate_on_constraint(e, email))?;

        tracing::info!(user_id = updated.id, "User updated");
        Ok(Some(updated))
    }

    /// Remove a user. Posts that reference the user are left in place.
    pub async fn delete(&self, id: UserId) -> DomainResult<bool> {
        tracing::info!(user_id = id, "Deleting user");
        let id = require_id(id, "User")?;

        if !self.users.exists_by_id(id).await? {
            tracing::warn!(user_id = id, "User not found for deletion");
            return Ok(false);
        }

        match self.users.delete(id).await {
            Ok(()) => {
                tracing::info!(user_id = id, "User deleted");
                Ok(true)
            }
            // Removed concurrently between the existence check and the delete.
            Err(RepoError::NotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// The storage unique index on email is the last line against races between
/// the lookup and the write.
fn duplicate_on_constraint(err: RepoError, email: &str) -> DomainError {
    match err {
        RepoError::Constraint(_) => DomainError::DuplicateEmail(email.to_string()),
        other => {
            tracing::error!(error = %other, "Failed to save user");
            DomainError::Persistence(other)
        }
    }
}
