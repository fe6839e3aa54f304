use std::sync::Arc;

use quill_core::{init_tracing, QuillConfig, ServerSettings};
use quill_data::MemoryStore;
use quill_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = QuillConfig::load("dev").unwrap_or_else(|e| {
        tracing::warn!(error = %e, "configuration not loaded, using defaults");
        QuillConfig::empty()
    });
    let settings = ServerSettings::from_config(&config)?;

    let store = Arc::new(if settings.seed_articles {
        MemoryStore::seeded()
    } else {
        MemoryStore::new()
    });
    tracing::info!(
        app = %settings.app_name,
        profile = config.profile(),
        seeded = settings.seed_articles,
        "starting"
    );

    let state = AppState::new(store.clone(), store, config);
    let articles = state.article_service.count().await?;
    tracing::info!(articles, "article store ready");

    quill_core::server::serve(app(state), &settings.address()).await
}
