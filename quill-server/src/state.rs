use std::sync::Arc;

use quill_core::QuillConfig;
use quill_data::{ArticleRepository, UserRepository};

use crate::services::ArticleService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub article_service: ArticleService,
    pub users: Arc<dyn UserRepository>,
    pub config: QuillConfig,
}

impl AppState {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        users: Arc<dyn UserRepository>,
        config: QuillConfig,
    ) -> Self {
        Self {
            article_service: ArticleService::new(articles),
            users,
            config,
        }
    }
}
