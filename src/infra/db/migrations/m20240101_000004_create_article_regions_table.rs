//! Migration: Create the article <-> region join table.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_regions_table::Regions;
use super::m20240101_000003_create_articles_table::Articles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleRegions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArticleRegions::ArticleId).integer().not_null())
                    .col(ColumnDef::new(ArticleRegions::RegionId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ArticleRegions::ArticleId)
                            .col(ArticleRegions::RegionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_regions_article_id")
                            .from(ArticleRegions::Table, ArticleRegions::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_regions_region_id")
                            .from(ArticleRegions::Table, ArticleRegions::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_regions_region_id")
                    .table(ArticleRegions::Table)
                    .col(ArticleRegions::RegionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleRegions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ArticleRegions {
    Table,
    ArticleId,
    RegionId,
}
