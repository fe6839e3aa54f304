use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_core::validation::validate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DataError;
use crate::models::{Article, ArticlePatch, NewArticle, NewUser, User};
use crate::repository::{ArticleRepository, UserRepository};
use crate::seed;

/// Process-lifetime store for articles and users.
///
/// Every operation takes the lock once, so callers never observe a
/// half-applied mutation, and concurrent updates to the same article
/// resolve as last-writer-wins. Reads hand out clones.
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    articles: HashMap<String, Slot>,
    users: HashMap<String, User>,
    /// Every id ever handed out, including deleted ones.
    issued_ids: HashSet<String>,
    next_seq: u64,
}

/// An article plus its insertion order, used to break `created_at` ties.
struct Slot {
    seq: u64,
    article: Article,
}

impl StoreState {
    fn fresh_id(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    fn insert(&mut self, article: Article) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.issued_ids.insert(article.id.clone());
        self.articles.insert(article.id.clone(), Slot { seq, article });
    }

    /// Newest first; equal timestamps fall back to the later insertion first.
    fn sorted(&self, filter: impl Fn(&Article) -> bool) -> Vec<Article> {
        let mut slots: Vec<&Slot> = self
            .articles
            .values()
            .filter(|slot| filter(&slot.article))
            .collect();
        slots.sort_by(|a, b| {
            b.article
                .created_at
                .cmp(&a.article.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        slots.into_iter().map(|slot| slot.article.clone()).collect()
    }
}

/// A timestamp strictly after `previous`, even if the clock has not moved.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + chrono::Duration::milliseconds(1)
    }
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// A store holding the fixed sample articles.
    pub fn seeded() -> Self {
        let articles = seed::sample_articles();
        tracing::debug!(count = articles.len(), "seeding article store");
        Self::with_articles(articles)
    }

    /// A store holding `articles` as given, ids and timestamps included.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let mut state = StoreState::default();
        for article in articles {
            state.insert(article);
        }
        Self {
            state: RwLock::new(state),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Article>, DataError> {
        Ok(self.state.read().await.sorted(|_| true))
    }

    async fn list_published(&self) -> Result<Vec<Article>, DataError> {
        Ok(self.state.read().await.sorted(|article| article.published))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, DataError> {
        let state = self.state.read().await;
        Ok(state.articles.get(id).map(|slot| slot.article.clone()))
    }

    async fn create(&self, article: NewArticle) -> Result<Article, DataError> {
        validate(&article).map_err(DataError::Validation)?;

        let mut state = self.state.write().await;
        let id = state.fresh_id();
        let article = article.into_article(id, Utc::now());
        state.insert(article.clone());
        Ok(article)
    }

    async fn update(&self, id: &str, patch: ArticlePatch) -> Result<Article, DataError> {
        validate(&patch).map_err(DataError::Validation)?;

        let mut state = self.state.write().await;
        let slot = state
            .articles
            .get_mut(id)
            .ok_or_else(|| DataError::article_not_found(id))?;
        slot.article.apply(patch);
        slot.article.updated_at = next_timestamp(slot.article.updated_at);
        Ok(slot.article.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DataError> {
        Ok(self.state.write().await.articles.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DataError> {
        Ok(self.state.read().await.articles.len())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>, DataError> {
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DataError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DataError> {
        validate(&user).map_err(DataError::Validation)?;

        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.username == user.username) {
            return Err(DataError::Conflict(format!(
                "Username {} is already taken",
                user.username
            )));
        }
        let id = state.fresh_id();
        let user = User {
            id: id.clone(),
            username: user.username,
            password: user.password,
        };
        state.users.insert(id, user.clone());
        tracing::info!(id = %user.id, username = %user.username, "user created");
        Ok(user)
    }
}
