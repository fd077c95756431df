//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Query chain state (chain ID, pending nonce, gas price, receipts)
//! - Submit raw signed transactions
//! - Poll for transaction inclusion

use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};

/// Interval between receipt polls while waiting for inclusion.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Chain RPC client wrapper.
///
/// Every call is bounded by the configured timeout. There is no retry or
/// failover: a failed call surfaces immediately as an error.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    endpoint: url::Url,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a client for the given endpoint URL.
    ///
    /// The HTTP transport connects lazily; use [`Self::verify_chain_id`]
    /// to confirm the endpoint actually answers and serves the expected
    /// network.
    pub fn connect(rpc_url: &str, rpc_timeout: Duration) -> ChainResult<Self> {
        let endpoint: url::Url = rpc_url.parse().map_err(|e| {
            ChainError::InvalidEndpoint(format!("'{}': {}", rpc_url, e))
        })?;

        let provider = Arc::new(ProviderBuilder::new().connect_http(endpoint.clone()))
            as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            provider,
            endpoint,
            timeout_duration: rpc_timeout,
        })
    }

    /// Verify the connected chain ID matches the expected one.
    pub async fn verify_chain_id(&self, expected: u64) -> ChainResult<()> {
        let actual = self.chain_id().await?;
        if actual != expected {
            return Err(ChainError::ChainMismatch { expected, actual });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn chain_id(&self) -> ChainResult<u64> {
        match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("chain ID lookup failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get the pending-state nonce for an address.
    pub async fn pending_nonce(&self, address: Address) -> ChainResult<u64> {
        let fut = self.provider.get_transaction_count(address).pending();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("nonce lookup failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get the suggested gas price in wei.
    pub async fn gas_price(&self) -> ChainResult<u128> {
        match timeout(self.timeout_duration, self.provider.get_gas_price()).await {
            Ok(Ok(price)) => Ok(price),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("gas price lookup failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Submit a raw signed transaction, returning its hash.
    pub async fn send_raw(&self, encoded: &[u8]) -> ChainResult<TxHash> {
        let fut = self.provider.send_raw_transaction(encoded);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("submission failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get a transaction receipt by hash, if mined.
    pub async fn receipt(&self, tx_hash: TxHash) -> ChainResult<Option<TransactionReceipt>> {
        let fut = self.provider.get_transaction_receipt(tx_hash);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(receipt)) => Ok(receipt),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("receipt lookup failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Block until the transaction is mined, then report its status.
    ///
    /// Polls the receipt every two seconds. A mined-but-reverted
    /// transaction maps to [`ConfirmationStatus::Failed`]; exceeding
    /// `wait_timeout` is an error.
    pub async fn wait_for_inclusion(
        &self,
        tx_hash: TxHash,
        wait_timeout: Duration,
    ) -> ChainResult<ConfirmationStatus> {
        let result = timeout(wait_timeout, async {
            let mut ticker = interval(RECEIPT_POLL_INTERVAL);

            loop {
                ticker.tick().await;

                let receipt = match self.receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "transaction reverted".to_string(),
                    ));
                }

                let block_number = receipt.block_number.unwrap_or_default();
                return Ok(ConfirmationStatus::Confirmed { block_number });
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout(wait_timeout.as_secs())),
        }
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
