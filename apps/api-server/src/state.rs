//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::{PostRepository, UserRepository};
use folio_core::{PostCatalog, UserDirectory};
use folio_infra::database::DatabaseConfig;
use folio_infra::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use folio_infra::{DatabasePool, PostgresPostRepository, PostgresUserRepository};

/// Storage backend as seen by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStatus {
    InMemory,
    Postgres,
    PostgresUnreachable,
}

impl StorageStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::InMemory => "in-memory",
            Self::Postgres => "postgres",
            Self::PostgresUnreachable => "postgres-unreachable",
        }
    }

    pub fn is_healthy(self) -> bool {
        self != Self::PostgresUnreachable
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub posts: Arc<PostCatalog>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabasePool>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabasePool::connect(config).await {
                    Ok(pool) => {
                        let pool = Arc::new(pool);
                        let users = Arc::new(PostgresUserRepository::new(pool.conn.clone()));
                        let posts = Arc::new(PostgresPostRepository::new(pool.conn.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            db: Some(pool),
                            ..Self::with_repositories(users, posts)
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
        }

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory()
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    fn with_repositories(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            users: Arc::new(UserDirectory::new(users.clone())),
            posts: Arc::new(PostCatalog::new(posts, users)),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Active storage backend, pinging the database when one is configured.
    pub async fn storage_status(&self) -> StorageStatus {
        #[cfg(feature = "postgres")]
        if let Some(pool) = &self.db {
            return if pool.ping().await {
                StorageStatus::Postgres
            } else {
                StorageStatus::PostgresUnreachable
            };
        }
        StorageStatus::InMemory
    }
}
