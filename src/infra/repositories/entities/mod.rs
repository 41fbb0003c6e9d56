//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod article;
pub mod article_region;
pub mod author;
pub mod region;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use article::{
    ActiveModel as ArticleActiveModel, Entity as ArticleEntity, Model as ArticleModel,
};
#[allow(unused_imports)]
pub use article_region::{Entity as ArticleRegionEntity, Model as ArticleRegionModel};
#[allow(unused_imports)]
pub use author::{ActiveModel as AuthorActiveModel, Entity as AuthorEntity, Model as AuthorModel};
#[allow(unused_imports)]
pub use region::{ActiveModel as RegionActiveModel, Entity as RegionEntity, Model as RegionModel};
