//! Value-transfer transaction construction.

use alloy::consensus::TxLegacy;
use alloy::primitives::{Address, Bytes, TxKind, U256};

/// Intrinsic gas cost of a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Build an unsigned legacy transfer with an empty payload.
///
/// The chain ID rides on the transaction so that signing produces an
/// EIP-155 replay-protected signature.
pub fn build_transfer(
    nonce: u64,
    to: Address,
    amount: U256,
    gas_price: u128,
    chain_id: u64,
) -> TxLegacy {
    TxLegacy {
        chain_id: Some(chain_id),
        nonce,
        gas_price,
        gas_limit: TRANSFER_GAS_LIMIT,
        to: TxKind::Call(to),
        value: amount,
        input: Bytes::new(),
    }
}
