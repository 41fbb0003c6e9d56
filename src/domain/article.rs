//! Article domain entity, its nested relationships and the wire format
//! used to read and write them.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;
use validator::Validate;

use super::author::{Author, AuthorResponse, CreateAuthor};
use super::region::{Region, RegionInput, RegionSummary};
use crate::config::NULL_AUTHOR_LITERAL;
use crate::errors::{AppError, AppResult};

/// Article domain entity with its relationships loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<Author>,
    /// Linked regions, ordered by region id
    pub regions: Vec<Region>,
}

/// Requested change to an article's author.
///
/// A missing `author` key and an explicit `null` mean different things, so
/// this type is always used with `#[serde(default)]`: the default covers the
/// missing key and `deserialize` only runs when the key is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorInput {
    /// Key absent: keep whatever author the article has.
    #[default]
    Unchanged,
    /// `null`, `"null"` or a string that is not an id: remove the author.
    Clear,
    /// Integer or numeric string. Unknown ids clear the author.
    Id(i32),
    /// Object form, see [`InlineAuthor`].
    Inline(InlineAuthor),
}

/// Author given as an object inside an article payload.
///
/// An `id` naming a stored author selects it and the other fields are
/// ignored. Otherwise a new author is created from the names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct InlineAuthor {
    pub id: Option<i32>,
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: Option<String>,
}

impl InlineAuthor {
    /// Build the creation data for an author that does not exist yet.
    pub fn to_create(&self) -> AppResult<CreateAuthor> {
        match (&self.first_name, &self.last_name) {
            (Some(first_name), Some(last_name)) => Ok(CreateAuthor {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            }),
            _ => Err(AppError::validation(
                "Author first_name and last_name are required",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for AuthorInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(AuthorInput::Clear),
            Value::Number(number) if number.is_f64() => Err(de::Error::invalid_type(
                Unexpected::Other("floating point number"),
                &AUTHOR_EXPECTED,
            )),
            Value::Number(number) => Ok(AuthorInput::from_number(&number)),
            Value::String(text) => Ok(AuthorInput::from_text(&text)),
            Value::Object(fields) => InlineAuthor::deserialize(Value::Object(fields))
                .map(AuthorInput::Inline)
                .map_err(de::Error::custom),
            Value::Bool(flag) => Err(de::Error::invalid_type(
                Unexpected::Bool(flag),
                &AUTHOR_EXPECTED,
            )),
            Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &AUTHOR_EXPECTED)),
        }
    }
}

const AUTHOR_EXPECTED: &str = "null, an author id or an author object";

impl AuthorInput {
    /// Integers outside the id range cannot name an author.
    fn from_number(number: &Number) -> Self {
        number
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map_or(AuthorInput::Clear, AuthorInput::Id)
    }

    fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text == NULL_AUTHOR_LITERAL {
            return AuthorInput::Clear;
        }
        text.parse().map(AuthorInput::Id).unwrap_or(AuthorInput::Clear)
    }

    /// Whether the payload mentioned the author at all.
    pub fn is_provided(&self) -> bool {
        !matches!(self, AuthorInput::Unchanged)
    }
}

/// Article create/update payload.
///
/// Every field is optional. On update, omitted fields (and `null` for the
/// scalar fields and `regions`) leave the stored value untouched; on create
/// they fall back to empty values. A `regions` list replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct ArticlePayload {
    /// Upsert key on create; ignored on update in favour of the path
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(length(max = 255, message = "title must be at most 255 characters"))]
    #[schema(example = "Fake Article", max_length = 255)]
    pub title: Option<String>,
    #[schema(example = "Fake Content")]
    pub content: Option<String>,
    /// `null`, an author id (number or string) or an author object
    #[serde(default)]
    #[schema(value_type = Object)]
    pub author: AuthorInput,
    pub regions: Option<Vec<RegionInput>>,
}

impl ArticlePayload {
    /// Validate the payload including its nested author and regions.
    pub fn validate_all(&self) -> AppResult<()> {
        self.validate()?;
        if let AuthorInput::Inline(author) = &self.author {
            author.validate()?;
        }
        for region in self.regions.iter().flatten() {
            region.validate()?;
        }
        Ok(())
    }
}

/// Article representation returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Fake Article")]
    pub title: String,
    #[schema(example = "Fake Content")]
    pub content: String,
    pub author: Option<AuthorResponse>,
    pub regions: Vec<RegionSummary>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author.map(AuthorResponse::from),
            regions: article.regions.into_iter().map(RegionSummary::from).collect(),
        }
    }
}
