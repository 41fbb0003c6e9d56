//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns, along with
//! the request/response shapes they are read from and written to.

pub mod article;
pub mod author;
pub mod region;

pub use article::{Article, ArticlePayload, ArticleResponse, AuthorInput, InlineAuthor};
pub use author::{Author, AuthorResponse, CreateAuthor, UpdateAuthor};
pub use region::{CreateRegion, Region, RegionInput, RegionResponse, RegionSummary, UpdateRegion};
