//! First-run setup configuration.

use serde::{Deserialize, Serialize};

/// Shared secret gating creation of the first admin account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupConfig {
    /// The setup key. Required.
    #[serde(default)]
    pub setup_key: String,
}
