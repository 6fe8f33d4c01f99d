//! Session token encoding, verification, and claims.

pub mod claims;
pub mod codec;

pub use claims::Claims;
pub use codec::{IssuedToken, SessionCodec, TokenError};
