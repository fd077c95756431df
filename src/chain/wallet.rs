//! Sender wallet: key parsing, address derivation, transfer signing.
//!
//! # Security
//! - Key material is never logged or serialized
//! - Credential sourcing lives in the config layer; this module only
//!   accepts an already-loaded hex string

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::network::TxSignerSync;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::chain::types::{ChainError, ChainResult};

/// Wallet holding the sender's signing key.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// Accepts the key with or without a `0x` prefix. The key is never
    /// logged.
    pub fn from_hex(private_key_hex: &str) -> ChainResult<Self> {
        let key_hex = private_key_hex
            .strip_prefix("0x")
            .unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// The sender address derived from the signing key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a legacy value-transfer transaction.
    ///
    /// Replay protection comes from the chain ID carried on the
    /// transaction itself (EIP-155).
    pub fn sign_transfer(&self, mut tx: TxLegacy) -> ChainResult<TxEnvelope> {
        let signature = self
            .signer
            .sign_transaction_sync(&mut tx)
            .map_err(|e| ChainError::Signing(format!("{}", e)))?;

        Ok(TxEnvelope::Legacy(tx.into_signed(signature)))
    }

    /// The underlying signer, for building wallet-backed providers.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}
