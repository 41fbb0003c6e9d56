//! Article handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{ArticlePayload, ArticleResponse};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create article routes
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:article_id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

/// List all articles with their author and regions
#[utoipa::path(
    get,
    path = "/articles",
    tag = "Articles",
    responses(
        (status = 200, description = "List of all articles", body = Vec<ArticleResponse>)
    )
)]
pub async fn list_articles(State(state): State<AppState>) -> AppResult<Json<Vec<ArticleResponse>>> {
    let articles = state.article_service.list_articles().await?;
    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

/// Create an article, creating nested authors and regions as needed
#[utoipa::path(
    post,
    path = "/articles",
    tag = "Articles",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ArticlePayload>,
) -> AppResult<Created<ArticleResponse>> {
    let article = state.article_service.create_article(payload).await?;
    Ok(Created(ArticleResponse::from(article)))
}

/// Get article by ID
#[utoipa::path(
    get,
    path = "/articles/{article_id}",
    tag = "Articles",
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article found", body = ArticleResponse),
        (status = 404, description = "Article not found")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> AppResult<Json<ArticleResponse>> {
    let article = state.article_service.get_article(article_id).await?;
    Ok(Json(ArticleResponse::from(article)))
}

/// Update an article. Fields left out of the body keep their value.
#[utoipa::path(
    put,
    path = "/articles/{article_id}",
    tag = "Articles",
    params(("article_id" = i32, Path, description = "Article ID")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "Article updated", body = ArticleResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ArticlePayload>,
) -> AppResult<Json<ArticleResponse>> {
    let article = state
        .article_service
        .update_article(article_id, payload)
        .await?;
    Ok(Json(ArticleResponse::from(article)))
}

/// Delete an article
#[utoipa::path(
    delete,
    path = "/articles/{article_id}",
    tag = "Articles",
    params(("article_id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article deleted", body = MessageResponse),
        (status = 404, description = "Article not found")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.article_service.delete_article(article_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Article {} deleted",
        article_id
    ))))
}
