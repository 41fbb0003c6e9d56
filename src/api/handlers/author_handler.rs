//! Author handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{AuthorResponse, CreateAuthor, UpdateAuthor};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:author_id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "Authors",
    responses(
        (status = 200, description = "List of all authors", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.author_service.list_authors().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "Authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAuthor>,
) -> AppResult<Created<AuthorResponse>> {
    let author = state.author_service.create_author(payload).await?;
    Ok(Created(AuthorResponse::from(author)))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    tag = "Authors",
    params(("author_id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<i32>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.author_service.get_author(author_id).await?;
    Ok(Json(AuthorResponse::from(author)))
}

/// Update author names
#[utoipa::path(
    put,
    path = "/authors/{author_id}",
    tag = "Authors",
    params(("author_id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state
        .author_service
        .update_author(author_id, payload)
        .await?;
    Ok(Json(AuthorResponse::from(author)))
}

/// Delete an author. Their articles remain, without an author.
#[utoipa::path(
    delete,
    path = "/authors/{author_id}",
    tag = "Authors",
    params(("author_id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.author_service.delete_author(author_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Author {} deleted",
        author_id
    ))))
}
