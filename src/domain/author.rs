//! Author domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Author creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    /// Given name
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    #[schema(example = "John", max_length = 255)]
    pub first_name: String,
    /// Family name
    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    #[schema(example = "Doe", max_length = 255)]
    pub last_name: String,
}

/// Author update data transfer object.
///
/// Omitted fields keep their stored value. A body `id` is accepted but the
/// path parameter always identifies the author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    #[schema(example = "Smith")]
    pub last_name: Option<String>,
}

/// Author representation returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}
