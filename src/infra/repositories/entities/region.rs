//! Region database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Region;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article_region::Entity")]
    ArticleRegion,
}

impl Related<super::article_region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleRegion.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_region::Relation::Article.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::article_region::Relation::Region.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Region {
    fn from(model: Model) -> Self {
        Region {
            id: model.id,
            code: model.code,
            name: model.name,
        }
    }
}
