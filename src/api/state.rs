//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ArticleService, AuthorService, RegionService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Article service
    pub article_service: Arc<dyn ArticleService>,
    /// Author service
    pub author_service: Arc<dyn AuthorService>,
    /// Region service
    pub region_service: Arc<dyn RegionService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            article_service: container.articles(),
            author_service: container.authors(),
            region_service: container.regions(),
            database,
        }
    }
}
