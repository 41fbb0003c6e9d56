//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over the articles, authors and regions tables
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ArticleChanges, ArticleRepository, ArticleStore, AuthorRepository, AuthorStore,
    RegionRepository, RegionStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxArticleRepository, TxAuthorRepository, TxRegionRepository,
    UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockArticleRepository, MockAuthorRepository, MockRegionRepository};
