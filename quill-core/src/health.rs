use axum::routing::get;
use axum::Router;

/// `GET /health` answering `OK` while the process is serving.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> &'static str {
    "OK"
}
