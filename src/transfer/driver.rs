//! Sequential bulk-distribution driver.
//!
//! # Responsibilities
//! - Seed the nonce, gas price, and chain ID once per run
//! - Build, sign, and submit one transfer per recipient, in order
//! - Pace submissions with a fixed delay
//! - Abort the whole run on the first failure

use std::time::Duration;

use alloy::eips::eip2718::Encodable2718;
use alloy::primitives::{Address, TxHash, U256};
use tokio::time::sleep;

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;
use crate::transfer::tx::build_transfer;

/// Delay between submissions, matching the endpoint-friendly pacing of
/// the original distribution runs.
pub const DEFAULT_PACING: Duration = Duration::from_secs(2);

/// Sequential transfer driver.
///
/// Owns the loop-local nonce counter for the duration of a run. The
/// counter is seeded once from the sender's pending nonce and never
/// reconciled against the network mid-run, so nothing else may submit
/// transactions for the same sender while a run is in flight.
pub struct Disburser {
    client: ChainClient,
    wallet: Wallet,
    amount: U256,
    pacing: Duration,
}

impl Disburser {
    pub fn new(client: ChainClient, wallet: Wallet, amount: U256, pacing: Duration) -> Self {
        Self {
            client,
            wallet,
            amount,
            pacing,
        }
    }

    /// Send the configured amount to every recipient, in sequence.
    ///
    /// Queries the pending nonce, gas price, and chain ID once, then
    /// submits with nonces `N, N+1, ...` in recipient order, sleeping
    /// the pacing delay after each submission. The first failure at any
    /// step aborts the run; recipients after the failing entry are
    /// never attempted. Returns the submitted hashes on full success.
    pub async fn run(&self, recipients: &[String]) -> ChainResult<Vec<TxHash>> {
        let sender = self.wallet.address();
        let mut nonce = self.client.pending_nonce(sender).await?;
        let gas_price = self.client.gas_price().await?;
        let chain_id = self.client.chain_id().await?;

        tracing::info!(
            sender = %sender,
            start_nonce = nonce,
            gas_price = gas_price,
            chain_id = chain_id,
            recipients = recipients.len(),
            "Starting disbursement"
        );

        let mut submitted = Vec::with_capacity(recipients.len());

        for (i, recipient) in recipients.iter().enumerate() {
            match self.submit_to(recipient, nonce, gas_price, chain_id).await {
                Ok(tx_hash) => {
                    submitted.push(tx_hash);
                    nonce += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        submitted = submitted.len(),
                        remaining = recipients.len() - i,
                        "Aborting disbursement; submitted transactions remain on-chain"
                    );
                    return Err(e);
                }
            }

            sleep(self.pacing).await;
        }

        tracing::info!(submitted = submitted.len(), "Disbursement complete");
        Ok(submitted)
    }

    /// Send a single transfer, optionally blocking until it is mined.
    ///
    /// A mined-but-reverted transaction surfaces as
    /// [`ChainError::Reverted`].
    pub async fn send_one(
        &self,
        recipient: &str,
        wait_timeout: Option<Duration>,
    ) -> ChainResult<(TxHash, Option<ConfirmationStatus>)> {
        let sender = self.wallet.address();
        let nonce = self.client.pending_nonce(sender).await?;
        let gas_price = self.client.gas_price().await?;
        let chain_id = self.client.chain_id().await?;

        let tx_hash = self.submit_to(recipient, nonce, gas_price, chain_id).await?;

        let status = match wait_timeout {
            Some(limit) => {
                let status = self.client.wait_for_inclusion(tx_hash, limit).await?;
                match &status {
                    ConfirmationStatus::Confirmed { block_number } => {
                        tracing::info!(
                            tx_hash = %tx_hash,
                            block_number = block_number,
                            "Transfer mined"
                        );
                    }
                    ConfirmationStatus::Failed(reason) => {
                        return Err(ChainError::Reverted(reason.clone()));
                    }
                }
                Some(status)
            }
            None => None,
        };

        Ok((tx_hash, status))
    }

    async fn submit_to(
        &self,
        recipient: &str,
        nonce: u64,
        gas_price: u128,
        chain_id: u64,
    ) -> ChainResult<TxHash> {
        let to: Address = recipient
            .parse()
            .map_err(|e| ChainError::InvalidAddress(format!("'{}': {}", recipient, e)))?;

        let tx = build_transfer(nonce, to, self.amount, gas_price, chain_id);
        let envelope = self.wallet.sign_transfer(tx)?;
        let tx_hash = self.client.send_raw(&envelope.encoded_2718()).await?;

        tracing::info!(
            recipient = %to,
            nonce = nonce,
            tx_hash = %tx_hash,
            "Transfer submitted"
        );

        Ok(tx_hash)
    }
}
