//! Region domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Region domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub code: String,
    pub name: String,
}

/// Region creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateRegion {
    #[validate(length(max = 255, message = "code must be at most 255 characters"))]
    #[schema(example = "AL", max_length = 255)]
    pub code: String,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[schema(example = "Albania", max_length = 255)]
    pub name: String,
}

/// Region update data transfer object. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateRegion {
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(max = 255, message = "code must be at most 255 characters"))]
    #[schema(example = "UK")]
    pub code: Option<String>,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[schema(example = "United Kingdom")]
    pub name: Option<String>,
}

/// A region as written inside an article payload.
///
/// Resolution is get-or-create: an `id` naming a stored region selects it
/// as-is, anything else creates a new region from `code` and `name`
/// (keeping the given `id`, if any).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct RegionInput {
    #[schema(example = 2)]
    pub id: Option<i32>,
    #[validate(length(max = 255, message = "code must be at most 255 characters"))]
    #[schema(example = "US")]
    pub code: Option<String>,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[schema(example = "United States of America")]
    pub name: Option<String>,
}

impl RegionInput {
    /// Build the creation data for a region that does not exist yet.
    pub fn to_create(&self) -> AppResult<CreateRegion> {
        match (&self.code, &self.name) {
            (Some(code), Some(name)) => Ok(CreateRegion {
                code: code.clone(),
                name: name.clone(),
            }),
            _ => Err(AppError::validation(match self.id {
                Some(id) => format!(
                    "Region {} does not exist; code and name are required to create it",
                    id
                ),
                None => "Region code and name are required".to_string(),
            })),
        }
    }
}

/// Full region representation returned by the regions endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegionResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "AL")]
    pub code: String,
    #[schema(example = "Albania")]
    pub name: String,
}

impl From<Region> for RegionResponse {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
        }
    }
}

/// Region as nested inside an article (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegionSummary {
    #[schema(example = "AL")]
    pub code: String,
    #[schema(example = "Albania")]
    pub name: String,
}

impl From<Region> for RegionSummary {
    fn from(region: Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
        }
    }
}
