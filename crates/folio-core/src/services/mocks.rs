//! mockall doubles of the repository ports.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::{Post, PostId, User, UserId};
use crate::error::RepoError;
use crate::ports::{BaseRepository, PostRepository, UserRepository};

mock! {
    pub Users {}

    #[async_trait]
    impl BaseRepository<User, UserId> for Users {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError>;
        async fn exists_by_id(&self, id: UserId) -> Result<bool, RepoError>;
        async fn find_all(&self) -> Result<Vec<User>, RepoError>;
        async fn save(&self, entity: User) -> Result<User, RepoError>;
        async fn delete(&self, id: UserId) -> Result<(), RepoError>;
    }

    #[async_trait]
    impl UserRepository for Users {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
    }
}

mock! {
    pub Posts {}

    #[async_trait]
    impl BaseRepository<Post, PostId> for Posts {
        async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;
        async fn exists_by_id(&self, id: PostId) -> Result<bool, RepoError>;
        async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
        async fn save(&self, entity: Post) -> Result<Post, RepoError>;
        async fn delete(&self, id: PostId) -> Result<(), RepoError>;
    }

    #[async_trait]
    impl PostRepository for Posts {
        async fn find_all_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, RepoError>;
    }
}

pub fn stored_user(id: UserId, name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn stored_post(id: PostId, user_id: UserId, title: &str, content: &str) -> Post {
    let now = Utc::now();
    Post {
        id,
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Buffer receiving formatted log lines at `WARN` and above.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's events into a fresh buffer until the guard drops.
    pub(crate) fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::WARN)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
