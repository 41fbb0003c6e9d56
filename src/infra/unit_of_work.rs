//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Exposes transaction-bound repositories for writes that must land together

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{
    article_repository, author_repository, region_repository, ArticleChanges, ArticleRepository,
    ArticleStore, AuthorRepository, AuthorStore, RegionRepository, RegionStore,
};
use crate::domain::{Article, Author, CreateAuthor, CreateRegion, Region};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock at the repository level or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get article repository
    fn articles(&self) -> Arc<dyn ArticleRepository>;

    /// Get author repository
    fn authors(&self) -> Arc<dyn AuthorRepository>;

    /// Get region repository
    fn regions(&self) -> Arc<dyn RegionRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get article repository for this transaction
    pub fn articles(&self) -> TxArticleRepository<'_> {
        TxArticleRepository { txn: self.txn }
    }

    /// Get author repository for this transaction
    pub fn authors(&self) -> TxAuthorRepository<'_> {
        TxAuthorRepository { txn: self.txn }
    }

    /// Get region repository for this transaction
    pub fn regions(&self) -> TxRegionRepository<'_> {
        TxRegionRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    article_repo: Arc<ArticleStore>,
    author_repo: Arc<AuthorStore>,
    region_repo: Arc<RegionStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            article_repo: Arc::new(ArticleStore::new(db.clone())),
            author_repo: Arc::new(AuthorStore::new(db.clone())),
            region_repo: Arc::new(RegionStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn articles(&self) -> Arc<dyn ArticleRepository> {
        self.article_repo.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorRepository> {
        self.author_repo.clone()
    }

    fn regions(&self) -> Arc<dyn RegionRepository> {
        self.region_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware article repository.
pub struct TxArticleRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxArticleRepository<'a> {
    /// Find article by ID with author and regions loaded
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Article>> {
        article_repository::find_article(self.txn, id).await
    }

    /// Whether an article row with this ID exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(article_repository::find_row(self.txn, id).await?.is_some())
    }

    /// Update the article `id` if it exists, otherwise insert it (keeping
    /// `id` as its key when given). Returns the article id.
    pub async fn upsert(&self, id: Option<i32>, changes: ArticleChanges) -> AppResult<i32> {
        let existing = match id {
            Some(id) => article_repository::find_row(self.txn, id).await?,
            None => None,
        };

        article_repository::write_row(self.txn, existing, id, changes).await
    }

    /// Replace the set of regions linked to an article
    pub async fn set_regions(&self, article_id: i32, region_ids: &[i32]) -> AppResult<()> {
        article_repository::replace_regions(self.txn, article_id, region_ids).await
    }
}

/// Transaction-aware author repository.
pub struct TxAuthorRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAuthorRepository<'a> {
    /// Find author by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        author_repository::find_author(self.txn, id).await
    }

    /// Create a new author
    pub async fn create(&self, author: CreateAuthor) -> AppResult<Author> {
        author_repository::insert_author(self.txn, author).await
    }
}

/// Transaction-aware region repository.
pub struct TxRegionRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxRegionRepository<'a> {
    /// Find region by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Region>> {
        region_repository::find_region(self.txn, id).await
    }

    /// Create a new region, using `id` as its key when given
    pub async fn create(&self, id: Option<i32>, region: CreateRegion) -> AppResult<Region> {
        region_repository::insert_region(self.txn, id, region).await
    }
}
