//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! Settings (RPC URL, hex key)
//!     → wallet.rs (key parsing, EIP-155 signing)
//!     → client.rs (RPC connection with per-call timeouts)
//!     → receipt polling (wait_for_inclusion)
//! ```
//!
//! # Security Constraints
//! - Private keys never come from this subsystem; the config layer
//!   hands them in
//! - Key material is never logged
//! - All RPC calls are bounded by the configured timeout

pub mod client;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainError, ChainResult, ConfirmationStatus};
pub use wallet::Wallet;
