//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → environment overlay (.env + process env: endpoint, key)
//!     → Settings (validated, credentials attached)
//!     → handed to the driver at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Credentials never appear in the TOML schema or in Debug output

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DisburseConfig, Settings, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR};
