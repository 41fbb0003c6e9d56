//! Test double for the Unit of Work backed by repository mocks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    ArticleRepository, AuthorRepository, MockArticleRepository, MockAuthorRepository,
    MockRegionRepository, RegionRepository, TransactionContext, UnitOfWork,
};

/// Unit of Work over mocked repositories. Transactions need a live
/// database and always fail here.
pub(crate) struct TestUnitOfWork {
    article_repo: Arc<MockArticleRepository>,
    author_repo: Arc<MockAuthorRepository>,
    region_repo: Arc<MockRegionRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn new(
        article_repo: MockArticleRepository,
        author_repo: MockAuthorRepository,
        region_repo: MockRegionRepository,
    ) -> Arc<Self> {
        Arc::new(Self {
            article_repo: Arc::new(article_repo),
            author_repo: Arc::new(author_repo),
            region_repo: Arc::new(region_repo),
        })
    }

    pub(crate) fn with_articles(repo: MockArticleRepository) -> Arc<Self> {
        Self::new(repo, MockAuthorRepository::new(), MockRegionRepository::new())
    }

    pub(crate) fn with_authors(repo: MockAuthorRepository) -> Arc<Self> {
        Self::new(MockArticleRepository::new(), repo, MockRegionRepository::new())
    }

    pub(crate) fn with_regions(repo: MockRegionRepository) -> Arc<Self> {
        Self::new(MockArticleRepository::new(), MockAuthorRepository::new(), repo)
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn articles(&self) -> Arc<dyn ArticleRepository> {
        self.article_repo.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorRepository> {
        self.author_repo.clone()
    }

    fn regions(&self) -> Arc<dyn RegionRepository> {
        self.region_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
