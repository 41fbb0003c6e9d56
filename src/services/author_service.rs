//! Author service - Handles author-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{Author, CreateAuthor, UpdateAuthor};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Author service trait for dependency injection.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// List all authors ordered by ID
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    /// Get author by ID
    async fn get_author(&self, id: i32) -> AppResult<Author>;

    /// Create a new author
    async fn create_author(&self, author: CreateAuthor) -> AppResult<Author>;

    /// Update the provided fields of an author
    async fn update_author(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author>;

    /// Delete author by ID. Its articles are kept without an author.
    async fn delete_author(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AuthorService using Unit of Work.
pub struct AuthorManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AuthorManager<U> {
    /// Create new author service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthorService for AuthorManager<U> {
    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.uow.authors().list().await
    }

    async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.uow
            .authors()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;

        let author = self.uow.authors().create(author).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    async fn update_author(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author> {
        changes.validate()?;
        self.uow.authors().update(id, changes).await
    }

    async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.uow.authors().delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
