//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubsite_auth::Claims;
use clubsite_core::types::pagination::PageResponse;
use clubsite_entity::news::News;
use clubsite_entity::season::Season;
use clubsite_entity::user::{User, UserRole};

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Role.
    pub role: UserRole,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token, also set as the session cookie.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Identity carried by a valid session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// User ID.
    pub user_id: Uuid,
    /// Username.
    pub username: String,
    /// Role.
    pub role: UserRole,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

impl From<Claims> for SessionInfo {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id(),
            expires_at: claims.expires_at(),
            username: claims.username,
            role: claims.role,
        }
    }
}

/// `GET /api/auth/session` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the request carried a valid session.
    pub authenticated: bool,
    /// The session, when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
}

/// `GET /api/setup` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupStatusResponse {
    /// Whether an administrator exists.
    pub initialized: bool,
}

/// Setup key check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifySetupKeyResponse {
    /// Whether the key matched.
    pub valid: bool,
}

/// Admin bootstrap result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupResponse {
    /// Always true.
    pub success: bool,
    /// Message.
    pub message: String,
    /// The created administrator.
    pub user_id: Uuid,
}

/// Default configuration seeding result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Always true.
    pub success: bool,
    /// Message.
    pub message: String,
    /// Whether the defaults were written by this call.
    pub created: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always true.
    pub success: bool,
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Successful response with `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: u64,
    /// Always true.
    pub success: bool,
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Total item count.
    pub total: u64,
    /// Total pages.
    pub total_pages: u64,
}

/// `GET /api/news` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsListResponse {
    /// Articles on this page.
    pub news: Vec<News>,
    /// Pagination.
    pub pagination: PaginationInfo,
}

impl From<PageResponse<News>> for NewsListResponse {
    fn from(page: PageResponse<News>) -> Self {
        Self {
            pagination: PaginationInfo {
                page: page.page,
                limit: page.limit,
                total: page.total,
                total_pages: page.total_pages,
            },
            news: page.items,
        }
    }
}

/// Bulk publication result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPublishResponse {
    /// Number of matched articles.
    pub modified: u64,
    /// Always true.
    pub success: bool,
}

/// `GET /api/seasons` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonListResponse {
    /// Seasons, most recent year first.
    pub seasons: Vec<Season>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
    /// Image host in use.
    pub media: String,
}
