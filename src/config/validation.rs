//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, amount parses and is non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config

use alloy::primitives::U256;

use crate::config::schema::DisburseConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `rpc_url` is set but does not parse as a URL.
    InvalidRpcUrl { url: String, reason: String },
    /// `amount_wei` is not a decimal integer, or is zero.
    InvalidAmount(String),
    /// `rpc_timeout_secs` is zero.
    ZeroRpcTimeout,
    /// `confirmation_timeout_secs` is zero.
    ZeroConfirmationTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidRpcUrl { url, reason } => {
                write!(f, "invalid rpc_url '{}': {}", url, reason)
            }
            ValidationError::InvalidAmount(amount) => {
                write!(f, "amount_wei '{}' is not a positive integer", amount)
            }
            ValidationError::ZeroRpcTimeout => write!(f, "rpc_timeout_secs must be non-zero"),
            ValidationError::ZeroConfirmationTimeout => {
                write!(f, "confirmation_timeout_secs must be non-zero")
            }
        }
    }
}

/// Validate a configuration, collecting every failure.
///
/// An empty `rpc_url` is allowed here; whether the endpoint can still
/// be resolved from the environment is decided at settings-assembly
/// time.
pub fn validate_config(config: &DisburseConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.rpc_url.is_empty() {
        if let Err(e) = config.rpc_url.parse::<url::Url>() {
            errors.push(ValidationError::InvalidRpcUrl {
                url: config.rpc_url.clone(),
                reason: e.to_string(),
            });
        }
    }

    match config.amount_wei.parse::<U256>() {
        Ok(amount) if amount.is_zero() => {
            errors.push(ValidationError::InvalidAmount(config.amount_wei.clone()));
        }
        Ok(_) => {}
        Err(_) => {
            errors.push(ValidationError::InvalidAmount(config.amount_wei.clone()));
        }
    }

    if config.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }
    if config.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConfirmationTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
