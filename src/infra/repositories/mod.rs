//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod article_repository;
pub(crate) mod author_repository;
pub(crate) mod entities;
pub(crate) mod region_repository;

pub use article_repository::{ArticleChanges, ArticleRepository, ArticleStore};
pub use author_repository::{AuthorRepository, AuthorStore};
pub use region_repository::{RegionRepository, RegionStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use article_repository::MockArticleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use author_repository::MockAuthorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use region_repository::MockRegionRepository;
