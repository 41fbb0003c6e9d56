//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod article_service;
mod author_service;
pub mod container;
mod region_service;

#[cfg(test)]
mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use article_service::{ArticleManager, ArticleService};
pub use author_service::{AuthorManager, AuthorService};
pub use region_service::{RegionManager, RegionService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
