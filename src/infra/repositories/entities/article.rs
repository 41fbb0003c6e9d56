//! Article database entity for SeaORM.
//!
//! Relationships are assembled into the domain `Article` by the repository,
//! so there is no `From<Model>` conversion here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// NULL when the article has no author
    pub author_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
    #[sea_orm(has_many = "super::article_region::Entity")]
    ArticleRegion,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::article_region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleRegion.def()
    }
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_region::Relation::Region.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::article_region::Relation::Article.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
