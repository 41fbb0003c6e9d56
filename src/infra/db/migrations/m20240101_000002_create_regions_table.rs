//! Migration: Create regions table.

use sea_orm_migration::prelude::*;

use crate::config::MAX_REGION_FIELD_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Regions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Regions::Code)
                            .string_len(MAX_REGION_FIELD_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Regions::Name)
                            .string_len(MAX_REGION_FIELD_LENGTH)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Seeding and lookups go through the code
        manager
            .create_index(
                Index::create()
                    .name("idx_regions_code")
                    .table(Regions::Table)
                    .col(Regions::Code)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Regions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Regions {
    Table,
    Id,
    Code,
    Name,
}
