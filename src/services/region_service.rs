//! Region service - Handles region-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateRegion, Region, UpdateRegion};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Region service trait for dependency injection.
#[async_trait]
pub trait RegionService: Send + Sync {
    /// List all regions ordered by ID
    async fn list_regions(&self) -> AppResult<Vec<Region>>;

    /// Get region by ID
    async fn get_region(&self, id: i32) -> AppResult<Region>;

    /// Create a new region
    async fn create_region(&self, region: CreateRegion) -> AppResult<Region>;

    /// Update the provided fields of a region
    async fn update_region(&self, id: i32, changes: UpdateRegion) -> AppResult<Region>;

    /// Delete region by ID, unlinking it from every article
    async fn delete_region(&self, id: i32) -> AppResult<()>;

    /// Return the region with this code, creating it when missing
    async fn ensure_region(&self, code: &str, name: &str) -> AppResult<Region>;
}

/// Concrete implementation of RegionService using Unit of Work.
pub struct RegionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RegionManager<U> {
    /// Create new region service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RegionService for RegionManager<U> {
    async fn list_regions(&self) -> AppResult<Vec<Region>> {
        self.uow.regions().list().await
    }

    async fn get_region(&self, id: i32) -> AppResult<Region> {
        self.uow
            .regions()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_region(&self, region: CreateRegion) -> AppResult<Region> {
        region.validate()?;

        let region = self.uow.regions().create(region).await?;
        tracing::info!(region_id = region.id, code = %region.code, "Region created");
        Ok(region)
    }

    async fn update_region(&self, id: i32, changes: UpdateRegion) -> AppResult<Region> {
        changes.validate()?;
        self.uow.regions().update(id, changes).await
    }

    async fn delete_region(&self, id: i32) -> AppResult<()> {
        self.uow.regions().delete(id).await?;
        tracing::info!(region_id = id, "Region deleted");
        Ok(())
    }

    async fn ensure_region(&self, code: &str, name: &str) -> AppResult<Region> {
        if let Some(region) = self.uow.regions().find_by_code(code).await? {
            return Ok(region);
        }

        self.create_region(CreateRegion {
            code: code.to_string(),
            name: name.to_string(),
        })
        .await
    }
}
