use std::sync::Arc;

use quill_core::HttpError;
use quill_data::{Article, ArticlePatch, ArticleRepository, DataError};
use tracing::{debug, info};

use crate::models::CreateArticleRequest;

const NOT_FOUND: &str = "Article not found";

/// Article use cases on top of an injected [`ArticleRepository`].
#[derive(Clone)]
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Article>, HttpError> {
        let articles = if published_only {
            self.repository.list_published().await?
        } else {
            self.repository.list_all().await?
        };
        Ok(articles)
    }

    pub async fn count(&self) -> Result<usize, HttpError> {
        Ok(self.repository.count().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Article, HttpError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, req: CreateArticleRequest) -> Result<Article, HttpError> {
        let article = self.repository.create(req.into_new_article()).await?;
        info!(id = %article.id, published = article.published, "article created");
        Ok(article)
    }

    pub async fn update(&self, id: &str, patch: ArticlePatch) -> Result<Article, HttpError> {
        match self.repository.update(id, patch).await {
            Ok(article) => {
                info!(id = %article.id, published = article.published, "article updated");
                Ok(article)
            }
            Err(DataError::NotFound(_)) => Err(not_found(id)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        info!(%id, "article deleted");
        Ok(())
    }
}

fn not_found(id: &str) -> HttpError {
    debug!(%id, "article not found");
    HttpError::NotFound(NOT_FOUND.to_string())
}
