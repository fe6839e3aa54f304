use async_trait::async_trait;

use crate::error::DataError;
use crate::models::{Article, ArticlePatch, NewArticle, NewUser, User};

/// Storage interface for articles.
///
/// Object-safe so the HTTP layer can hold an `Arc<dyn ArticleRepository>`
/// and a durable backend can replace the in-memory one.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Every article, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Article>, DataError>;

    /// Published articles only, same ordering as [`list_all`](Self::list_all).
    async fn list_published(&self) -> Result<Vec<Article>, DataError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, DataError>;

    /// Validate and store a new article with a fresh id and timestamps.
    async fn create(&self, article: NewArticle) -> Result<Article, DataError>;

    /// Merge the fields present in `patch` and refresh `updated_at`.
    ///
    /// Fails with [`DataError::NotFound`] when `id` is unknown.
    async fn update(&self, id: &str, patch: ArticlePatch) -> Result<Article, DataError>;

    /// Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: &str) -> Result<bool, DataError>;

    async fn count(&self) -> Result<usize, DataError>;
}

/// Storage interface for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, id: &str) -> Result<Option<User>, DataError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DataError>;

    /// Fails with [`DataError::Conflict`] when the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, DataError>;
}
