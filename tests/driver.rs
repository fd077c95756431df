//! End-to-end driver tests against a JSON-RPC stub.

use std::time::Duration;

use alloy::consensus::{Transaction, TxEnvelope};
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{Address, TxKind, U256};

use disburser::chain::{ChainClient, ChainError, ConfirmationStatus, Wallet};
use disburser::transfer::{Disburser, TRANSFER_GAS_LIMIT};

mod common;
use common::{MockChain, MockRpc};

// Anvil's first account
const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const RECIPIENTS: [&str; 3] = [
    "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
    "0x90F79bf6EB2c4f870365E785982E1f101E93b906",
];

fn driver_for(rpc: &MockRpc, pacing_ms: u64) -> Disburser {
    let client = ChainClient::connect(&rpc.url(), Duration::from_secs(5)).unwrap();
    let wallet = Wallet::from_hex(TEST_PRIVATE_KEY).unwrap();
    Disburser::new(
        client,
        wallet,
        U256::from(1_000_000_000_000u64),
        Duration::from_millis(pacing_ms),
    )
}

fn decode_legacy(raw: &str) -> alloy::consensus::Signed<alloy::consensus::TxLegacy> {
    let bytes = alloy::hex::decode(raw).unwrap();
    let envelope = TxEnvelope::decode_2718(&mut bytes.as_slice()).unwrap();
    match envelope {
        TxEnvelope::Legacy(signed) => signed,
        other => panic!("expected a legacy transaction, got {:?}", other),
    }
}

#[tokio::test]
async fn disburse_issues_sequential_nonces_in_recipient_order() {
    let rpc = MockRpc::start(MockChain {
        chain_id: 31337,
        start_nonce: 7,
        ..Default::default()
    })
    .await;

    let driver = driver_for(&rpc, 10);
    let recipients: Vec<String> = RECIPIENTS.iter().map(|r| r.to_string()).collect();
    let hashes = driver.run(&recipients).await.unwrap();
    assert_eq!(hashes.len(), 3);

    let raw_txs = rpc.raw_txs();
    assert_eq!(raw_txs.len(), 3);

    for (i, raw) in raw_txs.iter().enumerate() {
        let signed = decode_legacy(raw);
        let expected_to: Address = RECIPIENTS[i].parse().unwrap();

        assert_eq!(signed.tx().nonce, 7 + i as u64);
        assert_eq!(signed.tx().to, TxKind::Call(expected_to));
        assert_eq!(signed.tx().value, U256::from(1_000_000_000_000u64));
        assert_eq!(signed.tx().gas_limit, TRANSFER_GAS_LIMIT);
        assert_eq!(signed.tx().chain_id(), Some(31337));
    }
}

#[tokio::test]
async fn disburse_queries_gas_price_and_chain_id_once() {
    let rpc = MockRpc::start(MockChain::default()).await;

    let driver = driver_for(&rpc, 10);
    let recipients: Vec<String> = RECIPIENTS.iter().map(|r| r.to_string()).collect();
    driver.run(&recipients).await.unwrap();

    assert_eq!(rpc.call_count("eth_gasPrice"), 1);
    assert_eq!(rpc.call_count("eth_chainId"), 1);
    assert_eq!(rpc.call_count("eth_getTransactionCount"), 1);
    assert_eq!(rpc.call_count("eth_sendRawTransaction"), 3);
}

#[tokio::test]
async fn disburse_aborts_on_first_submission_failure() {
    // Stub accepts one submission, then rejects
    let rpc = MockRpc::start(MockChain {
        fail_after: Some(1),
        ..Default::default()
    })
    .await;

    let driver = driver_for(&rpc, 10);
    let recipients: Vec<String> = RECIPIENTS.iter().map(|r| r.to_string()).collect();
    let result = driver.run(&recipients).await;

    assert!(matches!(result, Err(ChainError::Rpc(_))));
    // Only the first transfer reached the endpoint; the third was never attempted
    assert_eq!(rpc.raw_txs().len(), 1);
    assert_eq!(rpc.call_count("eth_sendRawTransaction"), 2);
}

#[tokio::test]
async fn disburse_aborts_on_malformed_recipient() {
    let rpc = MockRpc::start(MockChain::default()).await;

    let driver = driver_for(&rpc, 10);
    let recipients = vec![
        RECIPIENTS[0].to_string(),
        "not-an-address".to_string(),
        RECIPIENTS[2].to_string(),
    ];
    let result = driver.run(&recipients).await;

    assert!(matches!(result, Err(ChainError::InvalidAddress(_))));
    assert_eq!(rpc.raw_txs().len(), 1);
}

#[tokio::test]
async fn send_one_waits_for_inclusion() {
    let rpc = MockRpc::start(MockChain::default()).await;

    let driver = driver_for(&rpc, 10);
    let (_, status) = driver
        .send_one(RECIPIENTS[0], Some(Duration::from_secs(10)))
        .await
        .unwrap();

    assert_eq!(
        status,
        Some(ConfirmationStatus::Confirmed { block_number: 16 })
    );
}

#[tokio::test]
async fn send_one_surfaces_reverted_transaction() {
    let rpc = MockRpc::start(MockChain {
        receipt_status: Some(false),
        ..Default::default()
    })
    .await;

    let driver = driver_for(&rpc, 10);
    let result = driver
        .send_one(RECIPIENTS[0], Some(Duration::from_secs(10)))
        .await;

    assert!(matches!(result, Err(ChainError::Reverted(_))));
}

#[tokio::test]
async fn wait_for_inclusion_times_out_while_pending() {
    let rpc = MockRpc::start(MockChain {
        receipt_status: None,
        ..Default::default()
    })
    .await;

    let client = ChainClient::connect(&rpc.url(), Duration::from_secs(5)).unwrap();
    let tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000001"
        .parse()
        .unwrap();
    let result = client
        .wait_for_inclusion(tx_hash, Duration::from_millis(300))
        .await;

    assert!(matches!(result, Err(ChainError::ConfirmationTimeout(_))));
}
