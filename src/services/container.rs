//! Service Container - Centralized service access.
//!
//! Holds one shared instance of every application service behind its
//! trait, so handlers and commands depend on abstractions only.

use std::sync::Arc;

use super::{ArticleService, AuthorService, RegionService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get article service
    fn articles(&self) -> Arc<dyn ArticleService>;

    /// Get author service
    fn authors(&self) -> Arc<dyn AuthorService>;

    /// Get region service
    fn regions(&self) -> Arc<dyn RegionService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    article_service: Arc<dyn ArticleService>,
    author_service: Arc<dyn AuthorService>,
    region_service: Arc<dyn RegionService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        article_service: Arc<dyn ArticleService>,
        author_service: Arc<dyn AuthorService>,
        region_service: Arc<dyn RegionService>,
    ) -> Self {
        Self {
            article_service,
            author_service,
            region_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{ArticleManager, AuthorManager, RegionManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            article_service: Arc::new(ArticleManager::new(uow.clone())),
            author_service: Arc::new(AuthorManager::new(uow.clone())),
            region_service: Arc::new(RegionManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn articles(&self) -> Arc<dyn ArticleService> {
        self.article_service.clone()
    }

    fn authors(&self) -> Arc<dyn AuthorService> {
        self.author_service.clone()
    }

    fn regions(&self) -> Arc<dyn RegionService> {
        self.region_service.clone()
    }
}
