//! HTTP client for the registry API

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::{Operation, RegistryError, Result};
use crate::types::*;

/// HTTP client for the Soroban contract registry API
///
/// # Example
///
/// ```rust,no_run
/// use soroban_registry_client::{ContractSearchParams, Network, RegistryClient, RegistryConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RegistryClient::new(RegistryConfig::from_env())?;
///
/// let page = client
///     .get_contracts(&ContractSearchParams {
///         query: Some("token".into()),
///         network: Some(Network::Testnet),
///         ..Default::default()
///     })
///     .await?;
///
/// for contract in &page.items {
///     println!("{} {}", contract.name, contract.contract_id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    client: Client,
}

impl RegistryClient {
    /// Create a new registry client
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RegistryError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(RegistryConfig::from_env())
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ==================== Contracts ====================

    /// Search and list contracts
    ///
    /// `params.tags` is not sent.
    pub async fn get_contracts(
        &self,
        params: &ContractSearchParams,
    ) -> Result<PaginatedResponse<Contract>> {
        let url = format!(
            "{}/api/contracts?{}",
            self.config.api_root(),
            params.to_query_string()
        );

        self.get(Operation::GetContracts, &url).await
    }

    /// Get a contract by registry ID
    pub async fn get_contract(&self, id: &str) -> Result<Contract> {
        let url = format!(
            "{}/api/contracts/{}",
            self.config.api_root(),
            urlencoding::encode(id)
        );

        self.get(Operation::GetContract, &url).await
    }

    /// Get all versions of a contract, in server order
    pub async fn get_contract_versions(&self, id: &str) -> Result<Vec<ContractVersion>> {
        let url = format!(
            "{}/api/contracts/{}/versions",
            self.config.api_root(),
            urlencoding::encode(id)
        );

        self.get(Operation::GetContractVersions, &url).await
    }

    /// Publish a new contract
    pub async fn publish_contract(&self, request: &PublishRequest) -> Result<Contract> {
        let operation = Operation::PublishContract;
        let url = format!("{}/api/contracts", self.config.api_root());

        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|source| RegistryError::Network { operation, source })?;

        self.handle_response(operation, response).await
    }

    // ==================== Publishers ====================

    /// Get a publisher by ID
    pub async fn get_publisher(&self, id: &str) -> Result<Publisher> {
        let url = format!(
            "{}/api/publishers/{}",
            self.config.api_root(),
            urlencoding::encode(id)
        );

        self.get(Operation::GetPublisher, &url).await
    }

    /// Get the contracts owned by a publisher
    pub async fn get_publisher_contracts(&self, id: &str) -> Result<Vec<Contract>> {
        let url = format!(
            "{}/api/publishers/{}/contracts",
            self.config.api_root(),
            urlencoding::encode(id)
        );

        self.get(Operation::GetPublisherContracts, &url).await
    }

    // ==================== Stats ====================

    /// Get registry-wide statistics
    pub async fn get_stats(&self) -> Result<RegistryStats> {
        let url = format!("{}/api/stats", self.config.api_root());

        self.get(Operation::GetStats, &url).await
    }

    // ==================== Helper Methods ====================

    async fn get<T: DeserializeOwned>(&self, operation: Operation, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RegistryError::Network { operation, source })?;

        self.handle_response(operation, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        debug!("{} -> {}", response.url(), status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "{}", operation);
            return Err(RegistryError::from_status(operation, status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RegistryError::Network { operation, source })?;

        serde_json::from_slice(&body).map_err(|source| {
            warn!("{}: undecodable response body", operation);
            RegistryError::Decode { operation, source }
        })
    }
}
