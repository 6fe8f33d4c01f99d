//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use clubsite_auth::{Authenticator, PasswordHasher, RouteGuard, SessionCodec, SetupGate};
use clubsite_core::config::AppConfig;
use clubsite_core::result::AppResult;
use clubsite_database::{DatabasePool, Stores};
use clubsite_service::{MediaService, NewsService, SeasonService, SiteConfigService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, absent with the in-memory provider
    pub db_pool: Option<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token signing and verification
    pub codec: Arc<SessionCodec>,
    /// Login
    pub authenticator: Arc<Authenticator>,
    /// Admin page guard
    pub guard: Arc<RouteGuard>,
    /// First admin bootstrap
    pub setup_gate: Arc<SetupGate>,

    // ── Services ─────────────────────────────────────────────
    /// Image hosting
    pub media: MediaService,
    /// News service
    pub news_service: Arc<NewsService>,
    /// Season service
    pub season_service: Arc<SeasonService>,
    /// Site configuration service
    pub site_config_service: Arc<SiteConfigService>,
}

impl AppState {
    /// Wire the auth components and services over `stores`.
    pub fn new(
        config: AppConfig,
        stores: Stores,
        media: MediaService,
        db_pool: Option<DatabasePool>,
    ) -> AppResult<Self> {
        let codec = SessionCodec::new(&config.auth);
        let hasher = PasswordHasher::new();

        let authenticator =
            Authenticator::new(Arc::clone(&stores.users), codec.clone(), hasher.clone())?;
        let guard = RouteGuard::new(codec.clone());
        let setup_gate = SetupGate::new(&config, Arc::clone(&stores.users), hasher);

        let news_service = NewsService::new(Arc::clone(&stores.news), media.clone());
        let season_service = SeasonService::new(Arc::clone(&stores.seasons), media.clone());
        let site_config_service =
            SiteConfigService::new(Arc::clone(&stores.site_config), media.clone());

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            codec: Arc::new(codec),
            authenticator: Arc::new(authenticator),
            guard: Arc::new(guard),
            setup_gate: Arc::new(setup_gate),
            media,
            news_service: Arc::new(news_service),
            season_service: Arc::new(season_service),
            site_config_service: Arc::new(site_config_service),
        })
    }
}
