//! # clubsite-auth
//!
//! Authentication and access control for the club site admin area.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-bounded session tokens
//! - `password`: Argon2id password hashing and the minimum-length policy
//! - `authenticator`: username/password login issuing session tokens
//! - `setup`: one-time bootstrap of the first administrator
//! - `guard`: path classification and redirect decisions for admin pages

pub mod authenticator;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod setup;

pub use authenticator::{AuthError, AuthenticatedSession, Authenticator};
pub use guard::{GuardDecision, GuardState, RouteClass, RouteGuard};
pub use jwt::{Claims, IssuedToken, SessionCodec, TokenError};
pub use password::{PasswordHasher, PasswordValidator};
pub use setup::{SetupError, SetupGate};
