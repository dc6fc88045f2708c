//! CLI command handlers - one registry call each, rendered for the terminal

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use soroban_registry_client::{
    Contract, ContractSearchParams, ContractVersion, Network, PaginatedResponse, PublishRequest,
    Publisher, RegistryClient, RegistryStats,
};

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

fn emit<T: Serialize>(format: Format, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Format::Text => println!("{}", text(value)),
    }
    Ok(())
}

pub async fn search(
    client: &RegistryClient,
    params: ContractSearchParams,
    format: Format,
) -> Result<()> {
    debug!(?params, "searching contracts");
    let page = client.get_contracts(&params).await?;
    emit(format, &page, render_page)
}

pub async fn info(client: &RegistryClient, id: &str, format: Format) -> Result<()> {
    let contract = client.get_contract(id).await?;
    emit(format, &contract, render_contract)
}

pub async fn versions(client: &RegistryClient, id: &str, format: Format) -> Result<()> {
    let versions = client.get_contract_versions(id).await?;
    emit(format, &versions, |v| render_versions(v))
}

pub async fn publish(client: &RegistryClient, request: PublishRequest, format: Format) -> Result<()> {
    debug!(contract_id = %request.contract_id, network = %request.network, "publishing contract");
    let contract = client.publish_contract(&request).await?;
    emit(format, &contract, |c| {
        format!("Published {} ({})\n\n{}", c.name, c.id, render_contract(c))
    })
}

pub async fn publisher(client: &RegistryClient, id: &str, format: Format) -> Result<()> {
    let publisher = client.get_publisher(id).await?;
    emit(format, &publisher, render_publisher)
}

pub async fn publisher_contracts(client: &RegistryClient, id: &str, format: Format) -> Result<()> {
    let contracts = client.get_publisher_contracts(id).await?;
    emit(format, &contracts, |c| render_contract_list(c))
}

pub async fn stats(client: &RegistryClient, format: Format) -> Result<()> {
    let stats = client.get_stats().await?;
    emit(format, &stats, render_stats)
}

/// Split a comma-separated tag list, dropping empty entries
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Build a publish request, defaulting to mainnet
#[allow(clippy::too_many_arguments)]
pub fn publish_request(
    contract_id: String,
    name: String,
    description: Option<String>,
    network: Option<Network>,
    category: Option<String>,
    tags: Option<&str>,
    source_url: Option<String>,
    publisher: String,
) -> PublishRequest {
    PublishRequest {
        contract_id,
        name,
        description,
        network: network.unwrap_or(Network::Mainnet),
        category,
        tags: parse_tags(tags),
        source_url,
        publisher_address: publisher,
    }
}

// ==================== Rendering ====================

fn verified_mark(verified: bool) -> &'static str {
    if verified {
        "✓"
    } else {
        " "
    }
}

pub fn render_contract(contract: &Contract) -> String {
    let mut out = format!(
        "{} [{}] {}\n  ID:          {}\n  Contract ID: {}\n  WASM hash:   {}\n  Publisher:   {}\n",
        contract.name,
        contract.network,
        if contract.is_verified { "(verified)" } else { "(unverified)" },
        contract.id,
        contract.contract_id,
        contract.wasm_hash,
        contract.publisher_id,
    );
    if let Some(ref description) = contract.description {
        out.push_str(&format!("  Description: {}\n", description));
    }
    if let Some(ref category) = contract.category {
        out.push_str(&format!("  Category:    {}\n", category));
    }
    if !contract.tags.is_empty() {
        out.push_str(&format!("  Tags:        {}\n", contract.tags.join(", ")));
    }
    out.push_str(&format!(
        "  Created:     {}\n  Updated:     {}",
        contract.created_at, contract.updated_at
    ));
    out
}

pub fn render_contract_list(contracts: &[Contract]) -> String {
    if contracts.is_empty() {
        return "No contracts found.".to_string();
    }
    contracts
        .iter()
        .map(|c| {
            format!(
                "{} {:<24} {:<10} {}",
                verified_mark(c.is_verified),
                c.name,
                c.network,
                c.contract_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_page(page: &PaginatedResponse<Contract>) -> String {
    format!(
        "{}\n\nPage {}/{} ({} total)",
        render_contract_list(&page.items),
        page.page,
        page.total_pages,
        page.total
    )
}

pub fn render_versions(versions: &[ContractVersion]) -> String {
    if versions.is_empty() {
        return "No versions published.".to_string();
    }
    versions
        .iter()
        .map(|v| {
            let mut line = format!("{:<12} {} {}", v.version, v.wasm_hash, v.created_at);
            if let Some(ref commit) = v.commit_hash {
                line.push_str(&format!(" ({})", commit));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_publisher(publisher: &Publisher) -> String {
    let mut out = format!(
        "{}\n  ID:      {}\n  Address: {}\n",
        publisher.username.as_deref().unwrap_or("(anonymous)"),
        publisher.id,
        publisher.stellar_address,
    );
    for (label, value) in [
        ("Email:  ", &publisher.email),
        ("GitHub: ", &publisher.github_url),
        ("Website:", &publisher.website),
    ] {
        if let Some(value) = value {
            out.push_str(&format!("  {} {}\n", label, value));
        }
    }
    out.push_str(&format!("  Joined:  {}", publisher.created_at));
    out
}

pub fn render_stats(stats: &RegistryStats) -> String {
    format!(
        "Contracts:  {}\nVerified:   {}\nPublishers: {}",
        stats.total_contracts, stats.verified_contracts, stats.total_publishers
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(name: &str, verified: bool) -> Contract {
        Contract {
            id: format!("{}-id", name),
            contract_id: "CAAAA".into(),
            wasm_hash: "abcd".into(),
            name: name.into(),
            description: None,
            publisher_id: "pub-1".into(),
            network: Network::Testnet,
            is_verified: verified,
            category: Some("token".into()),
            tags: vec!["a".into(), "b".into()],
            created_at: "2024-01-01".into(),
            updated_at: "2024-01-02".into(),
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(Some(" a, b ,,c")), vec!["a", "b", "c"]);
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn test_publish_request_defaults_to_mainnet() {
        let req = publish_request(
            "C1".into(),
            "Token".into(),
            None,
            None,
            None,
            Some("defi"),
            None,
            "GABC".into(),
        );
        assert_eq!(req.network, Network::Mainnet);
        assert_eq!(req.tags, vec!["defi"]);
        assert_eq!(req.publisher_address, "GABC");
    }

    #[test]
    fn test_render_contract() {
        let out = render_contract(&contract("Token", true));
        assert!(out.starts_with("Token [testnet] (verified)"));
        assert!(out.contains("Tags:        a, b"));
        assert!(!out.contains("Description"));
    }

    #[test]
    fn test_render_page() {
        let page = PaginatedResponse {
            items: vec![contract("One", true), contract("Two", false)],
            total: 2,
            page: 1,
            page_size: 20,
            total_pages: 1,
        };
        let out = render_page(&page);
        assert_eq!(out.lines().count(), 4);
        assert!(out.ends_with("Page 1/1 (2 total)"));
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(render_contract_list(&[]), "No contracts found.");
        assert_eq!(render_versions(&[]), "No versions published.");
    }

    #[test]
    fn test_render_stats() {
        let out = render_stats(&RegistryStats {
            total_contracts: 10,
            verified_contracts: 4,
            total_publishers: 3,
        });
        assert_eq!(out, "Contracts:  10\nVerified:   4\nPublishers: 3");
    }
}
