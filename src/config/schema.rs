//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Environment variable holding the sender's hex private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "DISBURSER_PRIVATE_KEY";

/// Environment variable holding the RPC endpoint URL.
pub const RPC_URL_ENV_VAR: &str = "DISBURSER_RPC_URL";

/// Disbursement configuration.
///
/// All fields have defaults so a minimal config (or none at all, with
/// the endpoint coming from the environment) is enough to run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisburseConfig {
    /// JSON-RPC endpoint URL. Empty means "take it from the
    /// environment".
    pub rpc_url: String,

    /// Expected chain ID. When set, the connected chain is verified
    /// against it before any submission.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Delay between submissions in milliseconds.
    pub pacing_ms: u64,

    /// Maximum time to wait for a transaction to be mined, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Amount per transfer in wei, as a decimal string.
    pub amount_wei: String,

    /// Default recipients file path.
    pub recipients_file: String,
}

impl Default for DisburseConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            chain_id: None,
            rpc_timeout_secs: 10,
            pacing_ms: 2_000,
            confirmation_timeout_secs: 60,
            amount_wei: "1000000000000".to_string(), // 0.000001 ETH
            recipients_file: "recipients.csv".to_string(),
        }
    }
}

/// Runtime settings: validated configuration plus credentials sourced
/// from the environment.
///
/// This is the only place credentials live; transfer logic receives
/// this struct and never touches `std::env` itself.
#[derive(Clone)]
pub struct Settings {
    pub config: DisburseConfig,
    /// Hex-encoded sender private key, if present in the environment.
    /// Commands that sign require it; read-only commands do not.
    pub private_key: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("config", &self.config)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
