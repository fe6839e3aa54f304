use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use quill_core::{HttpError, Validated};
use quill_data::{Article, ArticlePatch};
use serde_json::{json, Value};

use crate::models::{CreateArticleRequest, ListParams};
use crate::state::AppState;

/// Article resource routes, relative to the mount point.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}

async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Article>>, HttpError> {
    let params = ListParams::from_pairs(pairs);
    let articles = state
        .article_service
        .list(params.published_only())
        .await?;
    Ok(Json(articles))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, HttpError> {
    let article = state.article_service.get_by_id(&id).await?;
    Ok(Json(article))
}

async fn create(
    State(state): State<AppState>,
    Validated(body): Validated<CreateArticleRequest>,
) -> Result<(StatusCode, Json<Article>), HttpError> {
    let article = state.article_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(patch): Validated<ArticlePatch>,
) -> Result<Json<Article>, HttpError> {
    let article = state.article_service.update(&id, patch).await?;
    Ok(Json(article))
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    state.article_service.delete(&id).await?;
    Ok(Json(json!({ "message": "Article deleted successfully" })))
}
