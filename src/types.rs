//! Types for the registry API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stellar network a contract is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Futurenet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Futurenet => "futurenet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "futurenet" => Ok(Network::Futurenet),
            other => Err(format!(
                "invalid network '{}': expected mainnet, testnet or futurenet",
                other
            )),
        }
    }
}

/// Registered contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Registry-internal ID
    pub id: String,
    /// On-chain contract ID
    pub contract_id: String,
    /// Hash of the deployed WASM
    pub wasm_hash: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub publisher_id: String,
    pub network: Network,
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Released version of a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractVersion {
    pub id: String,
    /// Registry ID of the owning contract
    pub contract_id: String,
    /// Semantic version string
    pub version: String,
    pub wasm_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<String>,
    pub created_at: String,
}

/// Account that publishes contracts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: String,
    pub stellar_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub created_at: String,
}

/// One page of results
///
/// `total_pages` is computed by the server as `ceil(total / page_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Whether the server has pages after this one
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filters for contract search
///
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractSearchParams {
    pub query: Option<String>,
    pub network: Option<Network>,
    pub verified_only: Option<bool>,
    pub category: Option<String>,
    /// Not sent to the server; the search endpoint has no tag filter.
    pub tags: Vec<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ContractSearchParams {
    /// Encode as a query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(ref query) = self.query {
            params.push(format!("query={}", urlencoding::encode(query)));
        }
        if let Some(network) = self.network {
            params.push(format!("network={}", network));
        }
        if let Some(verified_only) = self.verified_only {
            params.push(format!("verified_only={}", verified_only));
        }
        if let Some(ref category) = self.category {
            params.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(page_size) = self.page_size {
            params.push(format!("page_size={}", page_size));
        }
        params.join("&")
    }
}

/// Request body for publishing a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub contract_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Stellar address of the publisher
    pub publisher_address: String,
}

/// Registry-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_contracts: u64,
    pub verified_contracts: u64,
    pub total_publishers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parse_and_display() {
        assert_eq!("TESTNET".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!(" futurenet ".parse::<Network>().unwrap(), Network::Futurenet);
        assert!("devnet".parse::<Network>().is_err());
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(
            serde_json::to_string(&Network::Futurenet).unwrap(),
            "\"futurenet\""
        );
    }

    #[test]
    fn test_empty_search_params() {
        assert_eq!(ContractSearchParams::default().to_query_string(), "");
    }

    #[test]
    fn test_search_params_order_and_encoding() {
        let params = ContractSearchParams {
            query: Some("token swap".into()),
            network: Some(Network::Testnet),
            verified_only: Some(false),
            category: Some("defi&more".into()),
            tags: vec![],
            page: Some(2),
            page_size: Some(50),
        };
        assert_eq!(
            params.to_query_string(),
            "query=token%20swap&network=testnet&verified_only=false&category=defi%26more&page=2&page_size=50"
        );
    }

    #[test]
    fn test_search_params_skip_tags() {
        let params = ContractSearchParams {
            tags: vec!["nft".into(), "game".into()],
            page: Some(1),
            ..Default::default()
        };
        let query = params.to_query_string();
        assert_eq!(query, "page=1");
        assert!(!query.contains("tags"));
    }

    #[test]
    fn test_contract_optional_fields_absent() {
        let json = r#"{
            "id": "c1",
            "contract_id": "CABC",
            "wasm_hash": "deadbeef",
            "name": "Token",
            "publisher_id": "p1",
            "network": "mainnet",
            "is_verified": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.description, None);
        assert_eq!(contract.category, None);
        assert!(contract.tags.is_empty());

        let value = serde_json::to_value(&contract).unwrap();
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_contract_rejects_unknown_network() {
        let json = r#"{
            "id": "c1", "contract_id": "CABC", "wasm_hash": "h", "name": "n",
            "publisher_id": "p1", "network": "devnet", "is_verified": false,
            "tags": [], "created_at": "t", "updated_at": "t"
        }"#;
        assert!(serde_json::from_str::<Contract>(json).is_err());
    }

    #[test]
    fn test_has_next_page() {
        let page: PaginatedResponse<Contract> = PaginatedResponse {
            items: vec![],
            total: 45,
            page: 2,
            page_size: 20,
            total_pages: 3,
        };
        assert!(page.has_next_page());

        let last = PaginatedResponse { page: 3, ..page };
        assert!(!last.has_next_page());
    }
}
