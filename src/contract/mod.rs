//! Bound contract interaction.

pub mod bindings;
pub mod ops;

pub use ops::{read_message, transfer_token, write_message};
