//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use clubsite_entity::season::{Player, SeasonInput};
use clubsite_service::news::{NewsInput, NewsPatch};

/// Login request body. Missing fields count as empty credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Admin bootstrap body. The setup key travels in the `x-setup-key` header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupRequest {
    /// Username of the first administrator.
    pub username: String,
    /// Password of the first administrator.
    pub password: String,
}

/// Setup key check body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySetupKeyRequest {
    /// Candidate setup key.
    #[serde(alias = "setupKey")]
    pub setup_key: String,
}

/// Query of `GET /api/initialize`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeQuery {
    /// Candidate setup key.
    #[serde(alias = "setupKey")]
    pub setup_key: Option<String>,
}

/// Create news request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNewsRequest {
    /// Headline.
    #[validate(length(min = 1, max = 300, message = "Title is required"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Image as a `data:` URL or hosted URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Publish immediately.
    #[serde(default, alias = "isPublished")]
    pub is_published: bool,
}

impl From<CreateNewsRequest> for NewsInput {
    fn from(req: CreateNewsRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            image: req.image,
            is_published: req.is_published,
        }
    }
}

/// Update news request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateNewsRequest {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New image.
    pub image: Option<String>,
    /// New publication state.
    #[serde(alias = "isPublished")]
    pub is_published: Option<bool>,
}

impl From<UpdateNewsRequest> for NewsPatch {
    fn from(req: UpdateNewsRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            image: req.image,
            is_published: req.is_published,
        }
    }
}

/// Bulk publication change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPublishRequest {
    /// Articles to change.
    pub ids: Vec<Uuid>,
    /// New publication state.
    #[serde(alias = "isPublished")]
    pub is_published: bool,
}

/// Query of `DELETE /api/news`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNewsQuery {
    /// Article to delete.
    pub id: Option<String>,
}

/// Create or replace a season.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeasonRequest {
    /// Season label, e.g. `"2024/2025"`.
    #[validate(length(min = 1, max = 50, message = "Year is required"))]
    pub year: String,
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Team photo as a `data:` URL or hosted URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Roster.
    #[serde(default)]
    pub players: Vec<Player>,
}

impl From<SeasonRequest> for SeasonInput {
    fn from(req: SeasonRequest) -> Self {
        Self {
            year: req.year,
            name: req.name,
            description: req.description,
            image: req.image,
            players: req.players,
        }
    }
}
