//! Article service - Handles article use cases including nested
//! author and region writes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Article, ArticlePayload, AuthorInput, RegionInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ArticleChanges, TransactionContext, UnitOfWork};

/// Article service trait for dependency injection.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// List all articles ordered by ID
    async fn list_articles(&self) -> AppResult<Vec<Article>>;

    /// Get article by ID
    async fn get_article(&self, id: i32) -> AppResult<Article>;

    /// Create an article. A payload `id` naming an existing article
    /// updates that article instead.
    async fn create_article(&self, payload: ArticlePayload) -> AppResult<Article>;

    /// Update the article `id` with the fields present in the payload
    async fn update_article(&self, id: i32, payload: ArticlePayload) -> AppResult<Article>;

    /// Delete article by ID
    async fn delete_article(&self, id: i32) -> AppResult<()>;

    /// Whether any article is linked to a region with this code
    async fn has_articles_in_region(&self, code: &str) -> AppResult<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveMode {
    Create,
    Update(i32),
}

/// Concrete implementation of ArticleService using Unit of Work.
pub struct ArticleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ArticleManager<U> {
    /// Create new article service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Write the article, its author and its regions in one transaction.
    async fn save(&self, mode: SaveMode, payload: ArticlePayload) -> AppResult<Article> {
        payload.validate_all()?;

        let article = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let target = match mode {
                        SaveMode::Create => payload.id,
                        SaveMode::Update(id) => {
                            if !ctx.articles().exists(id).await? {
                                return Err(AppError::NotFound);
                            }
                            Some(id)
                        }
                    };

                    let author_id = resolve_author(&ctx, &payload.author).await?;
                    let region_ids = match &payload.regions {
                        Some(regions) => Some(resolve_regions(&ctx, regions).await?),
                        None => None,
                    };

                    let changes = ArticleChanges {
                        title: payload.title,
                        content: payload.content,
                        author_id,
                    };
                    let article_id = ctx.articles().upsert(target, changes).await?;

                    if let Some(region_ids) = region_ids {
                        ctx.articles().set_regions(article_id, &region_ids).await?;
                    }

                    ctx.articles().find_by_id(article_id).await?.ok_or_not_found()
                })
            })
            .await?;

        tracing::info!(
            article_id = article.id,
            regions = article.regions.len(),
            "Article saved"
        );
        Ok(article)
    }
}

/// Turn the payload's author into the value to store.
///
/// `None` leaves the stored author untouched. Ids that name no author
/// remove it.
async fn resolve_author(
    ctx: &TransactionContext<'_>,
    input: &AuthorInput,
) -> AppResult<Option<Option<i32>>> {
    let resolved = match input {
        AuthorInput::Unchanged => return Ok(None),
        AuthorInput::Clear => None,
        AuthorInput::Id(id) => ctx.authors().find_by_id(*id).await?.map(|a| a.id),
        AuthorInput::Inline(inline) => {
            let existing = match inline.id {
                Some(id) => ctx.authors().find_by_id(id).await?,
                None => None,
            };
            match existing {
                Some(author) => Some(author.id),
                None => Some(ctx.authors().create(inline.to_create()?).await?.id),
            }
        }
    };

    Ok(Some(resolved))
}

/// Get or create every region in the payload, keeping payload order.
async fn resolve_regions(
    ctx: &TransactionContext<'_>,
    regions: &[RegionInput],
) -> AppResult<Vec<i32>> {
    let mut ids = Vec::with_capacity(regions.len());

    for input in regions {
        let existing = match input.id {
            Some(id) => ctx.regions().find_by_id(id).await?,
            None => None,
        };
        let region = match existing {
            Some(region) => region,
            None => ctx.regions().create(input.id, input.to_create()?).await?,
        };
        ids.push(region.id);
    }

    Ok(ids)
}

#[async_trait]
impl<U: UnitOfWork> ArticleService for ArticleManager<U> {
    async fn list_articles(&self) -> AppResult<Vec<Article>> {
        self.uow.articles().list().await
    }

    async fn get_article(&self, id: i32) -> AppResult<Article> {
        self.uow
            .articles()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_article(&self, payload: ArticlePayload) -> AppResult<Article> {
        self.save(SaveMode::Create, payload).await
    }

    async fn update_article(&self, id: i32, payload: ArticlePayload) -> AppResult<Article> {
        self.save(SaveMode::Update(id), payload).await
    }

    async fn delete_article(&self, id: i32) -> AppResult<()> {
        self.uow.articles().delete(id).await?;
        tracing::info!(article_id = id, "Article deleted");
        Ok(())
    }

    async fn has_articles_in_region(&self, code: &str) -> AppResult<bool> {
        self.uow.articles().exists_in_region(code).await
    }
}
