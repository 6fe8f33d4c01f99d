//! Repository traits consumed by the auth and service layers.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`] and
//! an in-memory implementation in [`crate::memory`]. Callers only ever hold
//! `Arc<dyn ...>` handles, bundled in [`Stores`].

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubsite_core::result::AppResult;
use clubsite_core::types::pagination::{PageRequest, PageResponse};
use clubsite_entity::news::{CreateNews, News, UpdateNews};
use clubsite_entity::season::{Season, SeasonInput};
use clubsite_entity::site_config::SiteConfig;
use clubsite_entity::user::{NewUser, User};

use crate::memory::{MemoryNewsStore, MemorySeasonStore, MemorySiteConfigStore, MemoryUserStore};
use crate::repositories::{
    NewsRepository, SeasonRepository, SiteConfigRepository, UserRepository,
};

/// Lookup and bootstrap of administrator credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a user by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Whether an administrator account exists.
    async fn admin_exists(&self) -> AppResult<bool>;

    /// Total number of stored users.
    async fn count(&self) -> AppResult<u64>;

    /// Insert the first administrator.
    ///
    /// The existence check and the insert are one atomic step: when an
    /// administrator already exists nothing is written and `Ok(None)` is
    /// returned, even if two callers race.
    async fn create_first_admin(&self, user: NewUser) -> AppResult<Option<User>>;
}

/// News article persistence.
#[async_trait]
pub trait NewsStore: Send + Sync + 'static {
    /// List articles newest first (by `published_at`), optionally filtered by
    /// publication state.
    async fn list(&self, published: Option<bool>, page: PageRequest)
    -> AppResult<PageResponse<News>>;

    /// Count articles, optionally filtered by publication state.
    async fn count(&self, published: Option<bool>) -> AppResult<u64>;

    /// Find an article by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<News>>;

    /// Insert a new article.
    async fn create(&self, data: CreateNews) -> AppResult<News>;

    /// Merge changes into an article. `None` when it does not exist.
    async fn update(&self, id: Uuid, data: UpdateNews) -> AppResult<Option<News>>;

    /// Set the publication flag on many articles, returning how many matched.
    async fn set_published(&self, ids: &[Uuid], is_published: bool) -> AppResult<u64>;

    /// Delete an article. `false` when it did not exist.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Season and roster persistence.
#[async_trait]
pub trait SeasonStore: Send + Sync + 'static {
    /// List seasons, most recent year first.
    async fn list(&self) -> AppResult<Vec<Season>>;

    /// Count seasons.
    async fn count(&self) -> AppResult<u64>;

    /// Find a season by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Season>>;

    /// Insert a season. Fails with `SEASON_EXISTS` when the year is taken.
    async fn create(&self, data: SeasonInput) -> AppResult<Season>;

    /// Replace a season's content. `None` when it does not exist.
    async fn update(&self, id: Uuid, data: SeasonInput) -> AppResult<Option<Season>>;

    /// Delete a season. `false` when it did not exist.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// The single site configuration document.
#[async_trait]
pub trait SiteConfigStore: Send + Sync + 'static {
    /// Read the stored document, if any.
    async fn get(&self) -> AppResult<Option<SiteConfig>>;

    /// Insert or overwrite the document.
    async fn save(&self, config: &SiteConfig) -> AppResult<SiteConfig>;

    /// Insert the document only when none exists. Returns whether it was written.
    async fn insert_if_absent(&self, config: &SiteConfig) -> AppResult<bool>;
}

/// The full set of repositories, cheap to clone.
#[derive(Clone)]
pub struct Stores {
    /// Administrator credentials.
    pub users: Arc<dyn CredentialStore>,
    /// News articles.
    pub news: Arc<dyn NewsStore>,
    /// Seasons.
    pub seasons: Arc<dyn SeasonStore>,
    /// Site configuration.
    pub site_config: Arc<dyn SiteConfigStore>,
}

impl Stores {
    /// Repositories backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            news: Arc::new(NewsRepository::new(pool.clone())),
            seasons: Arc::new(SeasonRepository::new(pool.clone())),
            site_config: Arc::new(SiteConfigRepository::new(pool)),
        }
    }

    /// Process-local repositories. Data is lost on restart.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            news: Arc::new(MemoryNewsStore::new()),
            seasons: Arc::new(MemorySeasonStore::new()),
            site_config: Arc::new(MemorySiteConfigStore::new()),
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
