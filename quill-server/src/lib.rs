//! HTTP resource layer of the Quill blog service.
//!
//! [`app`] assembles the router; the `quill-server` binary wires it to
//! configuration and the in-memory store.

pub mod controllers;
pub mod models;
pub mod services;
pub mod state;

use axum::Router;
use quill_core::{catch_panic_layer, default_cors, default_trace, health};

pub use state::AppState;

/// The full application: article resource under `/api/articles` and the
/// `/api/blogs` alias, plus `/health`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/articles", controllers::article_controller::routes())
        .nest("/api/blogs", controllers::article_controller::routes())
        .merge(health::routes::<AppState>())
        .layer(catch_panic_layer())
        .layer(default_trace())
        .layer(default_cors())
        .with_state(state)
}
