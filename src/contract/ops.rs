//! Thin call/transact helpers over the generated bindings.
//!
//! Nonce and gas handling on this path is fully delegated to alloy's
//! wallet-backed provider fillers; the manual nonce counter in the
//! transfer driver is not involved.

use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::ProviderBuilder;

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;
use crate::contract::bindings::{MessageStore, Token};

/// Submit a `writeMessage` transaction, returning the pending hash.
pub async fn write_message(
    wallet: &Wallet,
    client: &ChainClient,
    contract: Address,
    message: &str,
) -> ChainResult<TxHash> {
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(wallet.signer().clone()))
        .connect_http(client.endpoint().clone());

    let store = MessageStore::new(contract, provider);
    let pending = store
        .writeMessage(message.to_string())
        .send()
        .await
        .map_err(|e| ChainError::Rpc(format!("writeMessage failed: {}", e)))?;
    let tx_hash = *pending.tx_hash();

    tracing::info!(contract = %contract, tx_hash = %tx_hash, "Message write submitted");
    Ok(tx_hash)
}

/// Read the stored message with an unauthorized view call.
pub async fn read_message(client: &ChainClient, contract: Address) -> ChainResult<String> {
    let provider = ProviderBuilder::new().connect_http(client.endpoint().clone());

    let store = MessageStore::new(contract, provider);
    store
        .readMessage()
        .call()
        .await
        .map_err(|e| ChainError::Rpc(format!("readMessage failed: {}", e)))
}

/// Transfer tokens and block until the transaction is mined.
///
/// A mined-but-reverted transfer surfaces as [`ChainError::Reverted`].
pub async fn transfer_token(
    wallet: &Wallet,
    client: &ChainClient,
    contract: Address,
    recipient: Address,
    amount: U256,
    wait_timeout: Duration,
) -> ChainResult<(TxHash, ConfirmationStatus)> {
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(wallet.signer().clone()))
        .connect_http(client.endpoint().clone());

    let token = Token::new(contract, provider);
    let pending = token
        .transfer(recipient, amount)
        .send()
        .await
        .map_err(|e| ChainError::Rpc(format!("token transfer failed: {}", e)))?;
    let tx_hash = *pending.tx_hash();

    tracing::info!(
        contract = %contract,
        recipient = %recipient,
        tx_hash = %tx_hash,
        "Token transfer submitted"
    );

    let status = client.wait_for_inclusion(tx_hash, wait_timeout).await?;
    if let ConfirmationStatus::Failed(reason) = &status {
        return Err(ChainError::Reverted(reason.clone()));
    }

    Ok((tx_hash, status))
}
