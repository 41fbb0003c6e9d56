//! Article repository implementation.
//!
//! Articles are stored as a row plus join rows, and read back as a domain
//! `Article` with its author and regions attached. Loading is batched: one
//! query per table regardless of how many articles are requested.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use sea_orm::sea_query::JoinType;

use super::entities::{
    article::{self, ActiveModel, Entity as ArticleEntity},
    article_region, author, region,
};
use crate::domain::{Article, Author, Region};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Article repository trait for dependency injection.
///
/// Writes that touch relationships go through the transactional
/// repository in the unit of work.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID with author and regions loaded
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Article>>;

    /// List all articles ordered by ID
    async fn list(&self) -> AppResult<Vec<Article>>;

    /// Whether any article is linked to a region with the given code
    async fn exists_in_region(&self, code: &str) -> AppResult<bool>;

    /// Delete article by ID together with its region links
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ArticleRepository
pub struct ArticleStore {
    db: DatabaseConnection,
}

impl ArticleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for ArticleStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Article>> {
        find_article(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<Article>> {
        let models = ArticleEntity::find()
            .order_by_asc(article::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_relations(&self.db, models).await
    }

    async fn exists_in_region(&self, code: &str) -> AppResult<bool> {
        let count = article_region::Entity::find()
            .join(JoinType::InnerJoin, article_region::Relation::Region.def())
            .filter(region::Column::Code.eq(code))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        article_region::Entity::delete_many()
            .filter(article_region::Column::ArticleId.eq(id))
            .exec(&txn)
            .await?;

        let result = ArticleEntity::delete_by_id(id)
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

/// Scalar columns of an article write. `None` keeps the stored value, or
/// falls back to the column default for a new row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Outer `None`: leave the author alone. `Some(None)`: remove it.
    pub author_id: Option<Option<i32>>,
}

/// Find an article with its relationships on any connection or transaction.
pub(crate) async fn find_article<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<Article>> {
    let Some(model) = find_row(db, id).await? else {
        return Ok(None);
    };

    Ok(load_relations(db, vec![model]).await?.pop())
}

/// Find the bare article row.
pub(crate) async fn find_row<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<article::Model>> {
    ArticleEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(AppError::from)
}

/// Write an article row: update `existing` in place, or insert a new row
/// (with `id` as its key when given). Returns the article id.
pub(crate) async fn write_row<C: ConnectionTrait>(
    db: &C,
    existing: Option<article::Model>,
    id: Option<i32>,
    changes: ArticleChanges,
) -> AppResult<i32> {
    match existing {
        Some(model) => {
            let article_id = model.id;
            let mut active: ActiveModel = model.into();

            if let Some(title) = changes.title {
                active.title = Set(title);
            }
            if let Some(content) = changes.content {
                active.content = Set(content);
            }
            if let Some(author_id) = changes.author_id {
                active.author_id = Set(author_id);
            }

            if active.is_changed() {
                active.update(db).await.map_err(AppError::from)?;
            }
            Ok(article_id)
        }
        None => {
            let mut active = ActiveModel {
                title: Set(changes.title.unwrap_or_default()),
                content: Set(changes.content.unwrap_or_default()),
                author_id: Set(changes.author_id.flatten()),
                ..Default::default()
            };
            if let Some(id) = id {
                active.id = Set(id);
            }

            let model = active.insert(db).await.map_err(AppError::from)?;
            tracing::debug!(article_id = model.id, "Article row inserted");
            Ok(model.id)
        }
    }
}

/// Make `region_ids` the exact set of regions linked to the article.
/// Repeated ids are linked once.
pub(crate) async fn replace_regions<C: ConnectionTrait>(
    db: &C,
    article_id: i32,
    region_ids: &[i32],
) -> AppResult<()> {
    article_region::Entity::delete_many()
        .filter(article_region::Column::ArticleId.eq(article_id))
        .exec(db)
        .await?;

    let mut seen = HashSet::new();
    let links: Vec<article_region::ActiveModel> = region_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .map(|region_id| article_region::ActiveModel {
            article_id: Set(article_id),
            region_id: Set(region_id),
        })
        .collect();

    if links.is_empty() {
        return Ok(());
    }

    article_region::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Attach authors and regions to article rows, preserving row order.
async fn load_relations<C: ConnectionTrait>(
    db: &C,
    models: Vec<article::Model>,
) -> AppResult<Vec<Article>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let author_ids: HashSet<i32> = models.iter().filter_map(|m| m.author_id).collect();
    let authors: HashMap<i32, Author> = if author_ids.is_empty() {
        HashMap::new()
    } else {
        author::Entity::find()
            .filter(author::Column::Id.is_in(author_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Author::from(m)))
            .collect()
    };

    let links = article_region::Entity::find()
        .filter(article_region::Column::ArticleId.is_in(models.iter().map(|m| m.id)))
        .all(db)
        .await?;

    let region_ids: HashSet<i32> = links.iter().map(|l| l.region_id).collect();
    let regions: HashMap<i32, Region> = if region_ids.is_empty() {
        HashMap::new()
    } else {
        region::Entity::find()
            .filter(region::Column::Id.is_in(region_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, Region::from(m)))
            .collect()
    };

    let mut regions_by_article: HashMap<i32, Vec<Region>> = HashMap::new();
    for link in links {
        if let Some(region) = regions.get(&link.region_id) {
            regions_by_article
                .entry(link.article_id)
                .or_default()
                .push(region.clone());
        }
    }

    let articles = models
        .into_iter()
        .map(|model| {
            let mut regions = regions_by_article.remove(&model.id).unwrap_or_default();
            regions.sort_by_key(|r| r.id);

            Article {
                id: model.id,
                title: model.title,
                content: model.content,
                author: model.author_id.and_then(|id| authors.get(&id).cloned()),
                regions,
            }
        })
        .collect();

    Ok(articles)
}
