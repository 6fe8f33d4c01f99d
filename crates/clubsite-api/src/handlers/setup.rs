//! First-run handlers: setup key check, admin bootstrap, default seeding.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use tracing::{info, warn};

use clubsite_auth::SetupError;

use crate::dto::request::{InitializeQuery, SetupRequest, VerifySetupKeyRequest};
use crate::dto::response::{
    InitializeResponse, SetupResponse, SetupStatusResponse, VerifySetupKeyResponse,
};
use crate::error::ApiResult;
use crate::extractors::AppJson;
use crate::state::AppState;

/// Header carrying the setup key on `POST /api/setup`.
pub const SETUP_KEY_HEADER: &str = "x-setup-key";

/// GET /api/setup
pub async fn status(State(state): State<AppState>) -> ApiResult<Json<SetupStatusResponse>> {
    let initialized = state.setup_gate.is_initialized().await?;
    Ok(Json(SetupStatusResponse { initialized }))
}

/// POST /api/setup/verify
pub async fn verify_setup_key(
    State(state): State<AppState>,
    AppJson(req): AppJson<VerifySetupKeyRequest>,
) -> Json<VerifySetupKeyResponse> {
    Json(VerifySetupKeyResponse {
        valid: state.setup_gate.verify_setup_key(&req.setup_key),
    })
}

/// POST /api/setup
pub async fn bootstrap(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(req): AppJson<SetupRequest>,
) -> ApiResult<(StatusCode, Json<SetupResponse>)> {
    let candidate = headers
        .get(SETUP_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let user = state
        .setup_gate
        .bootstrap_admin(&req.username, &req.password, candidate)
        .await?;

    if let Err(e) = state.site_config_service.ensure_defaults().await {
        warn!(error = %e, "Failed to seed default site configuration");
    }

    Ok((
        StatusCode::CREATED,
        Json(SetupResponse {
            success: true,
            message: "Administrator created".to_string(),
            user_id: user.id,
        }),
    ))
}

/// GET /api/initialize?setup_key=...
pub async fn initialize(
    State(state): State<AppState>,
    query: Result<Query<InitializeQuery>, QueryRejection>,
) -> ApiResult<Json<InitializeResponse>> {
    let Query(query) = query?;
    let candidate = query.setup_key.unwrap_or_default();
    if !state.setup_gate.verify_setup_key(&candidate) {
        warn!("Initialization rejected: invalid setup key");
        return Err(SetupError::Unauthorized.into());
    }

    let created = state.site_config_service.ensure_defaults().await?;
    info!(created, "Initialization requested");

    let message = if created {
        "Default site configuration created"
    } else {
        "Site configuration already present"
    };
    Ok(Json(InitializeResponse {
        success: true,
        message: message.to_string(),
        created,
    }))
}
