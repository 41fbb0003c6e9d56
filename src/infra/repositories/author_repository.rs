//! Author repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait, Value,
};

use super::entities::{
    article,
    author::{self, ActiveModel, Entity as AuthorEntity},
};
use crate::domain::{Author, CreateAuthor, UpdateAuthor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find author by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    /// List all authors ordered by ID
    async fn list(&self) -> AppResult<Vec<Author>>;

    /// Create a new author
    async fn create(&self, author: CreateAuthor) -> AppResult<Author>;

    /// Update the provided fields of an author
    async fn update(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author>;

    /// Delete author by ID, detaching it from its articles
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AuthorRepository
pub struct AuthorStore {
    db: DatabaseConnection,
}

impl AuthorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        find_author(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        let models = AuthorEntity::find()
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Author::from).collect())
    }

    async fn create(&self, author: CreateAuthor) -> AppResult<Author> {
        insert_author(&self.db, author).await
    }

    async fn update(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author> {
        let author = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = author.clone().into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }

        if !active.is_changed() {
            return Ok(Author::from(author));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Author::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        // Articles outlive their author
        article::Entity::update_many()
            .col_expr(article::Column::AuthorId, Expr::value(Value::Int(None)))
            .filter(article::Column::AuthorId.eq(id))
            .exec(&txn)
            .await?;

        let result = AuthorEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}

/// Find an author on any connection or transaction.
pub(crate) async fn find_author<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Author>> {
    let result = AuthorEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Author::from))
}

/// Insert an author on any connection or transaction.
pub(crate) async fn insert_author<C: ConnectionTrait>(
    db: &C,
    author: CreateAuthor,
) -> AppResult<Author> {
    let active_model = ActiveModel {
        first_name: Set(author.first_name),
        last_name: Set(author.last_name),
        ..Default::default()
    };

    let model = active_model.insert(db).await.map_err(AppError::from)?;
    tracing::debug!(author_id = model.id, "Author created");

    Ok(Author::from(model))
}
