//! Route guard for the admin area.
//!
//! Classifies a request path and decides, from the presence and validity of a
//! session token alone, whether to forward the request or redirect it. The
//! guard never touches the credential store and never surfaces errors.

use chrono::{DateTime, Utc};

use crate::jwt::SessionCodec;

/// Path of the admin login page.
pub const LOGIN_PATH: &str = "/admin/login";
/// Path of the first-run bootstrap page.
pub const INITIALIZE_PATH: &str = "/admin/initialize";
/// Dashboard users land on once signed in.
pub const DASHBOARD_PATH: &str = "/admin";

/// Where a path falls relative to the admin area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Outside the admin area.
    Public,
    /// `/api` and below; API handlers enforce their own access rules.
    Api,
    /// The login page.
    Login,
    /// The bootstrap page.
    Initialize,
    /// Any other page under `/admin`.
    Protected,
}

/// Guard state for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Nothing to enforce.
    Public,
    /// Protected page without a valid session.
    ProtectedUnauthenticated,
    /// Protected page with a valid session.
    ProtectedAuthenticated,
    /// Login page visited with a valid session.
    LoginPageAuthenticated,
}

/// What to do with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Forward the request unchanged.
    Allow,
    /// Redirect to the given location.
    RedirectTo(String),
}

impl RouteClass {
    /// Classify a request target (`path` or `path?query`).
    ///
    /// Matching works on decoded, normalized segments so that encoded or
    /// dotted spellings of `/admin` cannot reach a protected page as public.
    /// A target that cannot be decoded is treated as protected.
    pub fn of(path_and_query: &str) -> Self {
        let path = path_and_query
            .split_once(['?', '#'])
            .map_or(path_and_query, |(path, _)| path);

        let Ok(decoded) = urlencoding::decode(path) else {
            return Self::Protected;
        };
        let segments = normalize(&decoded);

        match segments.as_slice() {
            ["api", ..] => Self::Api,
            ["admin", "login"] => Self::Login,
            ["admin", "initialize"] => Self::Initialize,
            ["admin", ..] => Self::Protected,
            _ => Self::Public,
        }
    }
}

/// Resolve `.` and `..` segments and drop empty ones.
fn normalize(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments
}

/// Applies the admin-area redirect rules.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    codec: SessionCodec,
}

impl RouteGuard {
    /// Creates a guard verifying tokens with `codec`.
    pub fn new(codec: SessionCodec) -> Self {
        Self { codec }
    }

    /// Decide for a request at the current time.
    pub fn decide(&self, path_and_query: &str, token: Option<&str>) -> GuardDecision {
        self.decide_at(path_and_query, token, Utc::now())
    }

    /// Decide for a request as if the current time were `now`.
    pub fn decide_at(
        &self,
        path_and_query: &str,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> GuardDecision {
        match self.state_at(path_and_query, token, now) {
            GuardState::Public | GuardState::ProtectedAuthenticated => GuardDecision::Allow,
            GuardState::ProtectedUnauthenticated => {
                GuardDecision::RedirectTo(login_redirect(path_and_query))
            }
            GuardState::LoginPageAuthenticated => {
                GuardDecision::RedirectTo(DASHBOARD_PATH.to_string())
            }
        }
    }

    /// Compute the guard state for a request.
    pub fn state_at(
        &self,
        path_and_query: &str,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> GuardState {
        match RouteClass::of(path_and_query) {
            RouteClass::Public | RouteClass::Api | RouteClass::Initialize => GuardState::Public,
            RouteClass::Login if self.has_valid_session(token, now) => {
                GuardState::LoginPageAuthenticated
            }
            RouteClass::Login => GuardState::Public,
            RouteClass::Protected if self.has_valid_session(token, now) => {
                GuardState::ProtectedAuthenticated
            }
            RouteClass::Protected => GuardState::ProtectedUnauthenticated,
        }
    }

    fn has_valid_session(&self, token: Option<&str>, now: DateTime<Utc>) -> bool {
        token.is_some_and(|t| self.codec.verify_at(t, now).is_ok())
    }
}

/// Login page location carrying the originally requested target.
pub fn login_redirect(path_and_query: &str) -> String {
    format!(
        "{LOGIN_PATH}?callbackUrl={}",
        urlencoding::encode(path_and_query)
    )
}
