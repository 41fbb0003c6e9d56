//! Region repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::entities::{
    article_region,
    region::{self, ActiveModel, Entity as RegionEntity},
};
use crate::domain::{CreateRegion, Region, UpdateRegion};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Region repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Find region by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Region>>;

    /// Find the first region with the given code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Region>>;

    /// List all regions ordered by ID
    async fn list(&self) -> AppResult<Vec<Region>>;

    /// Create a new region
    async fn create(&self, region: CreateRegion) -> AppResult<Region>;

    /// Update the provided fields of a region
    async fn update(&self, id: i32, changes: UpdateRegion) -> AppResult<Region>;

    /// Delete region by ID, unlinking it from every article
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of RegionRepository
pub struct RegionStore {
    db: DatabaseConnection,
}

impl RegionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegionRepository for RegionStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Region>> {
        find_region(&self.db, id).await
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Region>> {
        let result = RegionEntity::find()
            .filter(region::Column::Code.eq(code))
            .order_by_asc(region::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Region::from))
    }

    async fn list(&self) -> AppResult<Vec<Region>> {
        let models = RegionEntity::find()
            .order_by_asc(region::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Region::from).collect())
    }

    async fn create(&self, region: CreateRegion) -> AppResult<Region> {
        insert_region(&self.db, None, region).await
    }

    async fn update(&self, id: i32, changes: UpdateRegion) -> AppResult<Region> {
        let region = RegionEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = region.clone().into();

        if let Some(code) = changes.code {
            active.code = Set(code);
        }
        if let Some(name) = changes.name {
            active.name = Set(name);
        }

        if !active.is_changed() {
            return Ok(Region::from(region));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Region::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        article_region::Entity::delete_many()
            .filter(article_region::Column::RegionId.eq(id))
            .exec(&txn)
            .await?;

        let result = RegionEntity::delete_by_id(id)
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

/// Find a region on any connection or transaction.
pub(crate) async fn find_region<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Region>> {
    let result = RegionEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Region::from))
}

/// Insert a region on any connection or transaction.
///
/// An explicit `id` is written as-is instead of taking the next key.
pub(crate) async fn insert_region<C: ConnectionTrait>(
    db: &C,
    id: Option<i32>,
    region: CreateRegion,
) -> AppResult<Region> {
    let mut active_model = ActiveModel {
        code: Set(region.code),
        name: Set(region.name),
        ..Default::default()
    };
    if let Some(id) = id {
        active_model.id = Set(id);
    }

    let model = active_model.insert(db).await.map_err(AppError::from)?;
    tracing::debug!(region_id = model.id, code = %model.code, "Region created");

    Ok(Region::from(model))
}
