//! Chain-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC endpoint URL could not be parsed.
    #[error("Invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was not mined within the wait window.
    #[error("Transaction not mined after {0} seconds")]
    ConfirmationTimeout(u64),

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction signing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// A recipient token could not be parsed as an address.
    #[error("Invalid recipient address {0}")]
    InvalidAddress(String),

    /// Connected chain does not match the configured chain ID.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Outcome of waiting for a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Transaction was mined and reported success.
    Confirmed { block_number: u64 },
    /// Transaction was mined but reverted.
    Failed(String),
}
