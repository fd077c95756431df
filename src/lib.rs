//! Bulk Ethereum funds distribution library.
//!
//! # Architecture Overview
//!
//! ```text
//!   recipients file (;-delimited)          environment / TOML
//!            │                                    │
//!            ▼                                    ▼
//!      ┌────────────┐                      ┌────────────┐
//!      │ recipients │                      │   config   │
//!      │   reader   │                      │  Settings  │
//!      └─────┬──────┘                      └─────┬──────┘
//!            │            ┌──────────┐           │
//!            └───────────▶│ transfer │◀──────────┘
//!                         │  driver  │
//!                         └────┬─────┘
//!              build → sign → submit → advance, per entry
//!                              │
//!                         ┌────▼─────┐        ┌──────────┐
//!                         │  chain   │        │ contract │
//!                         │  client  │        │ bindings │
//!                         └──────────┘        └──────────┘
//! ```
//!
//! The driver is strictly sequential: one transfer at a time, a fixed
//! pacing delay between submissions, and the first error aborts the
//! whole run. The loop-local nonce counter is correct only because
//! nothing submits concurrently for the same sender.

pub mod chain;
pub mod config;
pub mod contract;
pub mod recipients;
pub mod transfer;

pub use chain::{ChainClient, ChainError, ConfirmationStatus, Wallet};
pub use config::{DisburseConfig, Settings};
pub use transfer::Disburser;
