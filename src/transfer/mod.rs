//! Transfer construction and the bulk-distribution driver.

pub mod driver;
pub mod tx;

pub use driver::{Disburser, DEFAULT_PACING};
pub use tx::{build_transfer, TRANSFER_GAS_LIMIT};
