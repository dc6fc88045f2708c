//! Rust client for the Soroban contract registry API
//!
//! # Example
//!
//! ```rust,no_run
//! use soroban_registry_client::{RegistryClient, RegistryConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RegistryClient::new(RegistryConfig::new("http://localhost:3001"))?;
//!
//! let stats = client.get_stats().await?;
//! println!("{} contracts, {} verified", stats.total_contracts, stats.verified_contracts);
//!
//! let contract = client.get_contract("my-contract-id").await?;
//! let versions = client.get_contract_versions(&contract.id).await?;
//! println!("{} has {} versions", contract.name, versions.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types
pub use client::RegistryClient;
pub use config::{RegistryConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{Operation, RegistryError, Result};
pub use types::*;
