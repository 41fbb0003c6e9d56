//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{article_handler, author_handler, region_handler};
use crate::domain::{
    ArticlePayload, ArticleResponse, AuthorResponse, CreateAuthor, CreateRegion, InlineAuthor,
    RegionInput, RegionResponse, RegionSummary, UpdateAuthor, UpdateRegion,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Articles API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Articles API",
        version = "0.1.0",
        description = "CRUD backend for articles, their authors and the regions they are published in",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Article endpoints
        article_handler::list_articles,
        article_handler::create_article,
        article_handler::get_article,
        article_handler::update_article,
        article_handler::delete_article,
        // Author endpoints
        author_handler::list_authors,
        author_handler::create_author,
        author_handler::get_author,
        author_handler::update_author,
        author_handler::delete_author,
        // Region endpoints
        region_handler::list_regions,
        region_handler::create_region,
        region_handler::get_region,
        region_handler::update_region,
        region_handler::delete_region,
    ),
    components(
        schemas(
            ArticlePayload,
            ArticleResponse,
            InlineAuthor,
            RegionInput,
            RegionSummary,
            AuthorResponse,
            CreateAuthor,
            UpdateAuthor,
            RegionResponse,
            CreateRegion,
            UpdateRegion,
            MessageResponse,
        )
    ),
    tags(
        (name = "Articles", description = "Articles with nested author and regions"),
        (name = "Authors", description = "Author management"),
        (name = "Regions", description = "Region management")
    )
)]
pub struct ApiDoc;
