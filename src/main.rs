//! soroban-registry: command-line front end for the Soroban contract registry
//!
//! Each subcommand makes a single registry API call and prints the result,
//! either as a human-readable summary or as raw JSON (`--json`).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use commands::Format;
use soroban_registry_client::{
    ContractSearchParams, Network, RegistryClient, RegistryConfig, API_URL_ENV, DEFAULT_API_URL,
};

#[derive(Debug, Parser)]
#[command(name = "soroban-registry", version)]
#[command(about = "Discover and publish contracts in the Soroban contract registry")]
struct Cli {
    /// Registry API URL
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Stellar network (mainnet | testnet | futurenet)
    #[arg(long, global = true)]
    network: Option<Network>,

    /// Print raw JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (HTTP requests and responses)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for contracts
    Search {
        /// Search text
        #[arg(long)]
        query: Option<String>,

        /// Filter by category (e.g. dex, token, nft)
        #[arg(long)]
        category: Option<String>,

        /// Only show verified contracts
        #[arg(long)]
        verified_only: bool,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show a contract
    Info {
        /// Registry contract ID
        id: String,
    },

    /// List the versions of a contract
    Versions {
        /// Registry contract ID
        id: String,
    },

    /// Publish a contract to the registry
    Publish {
        /// On-chain contract ID
        #[arg(long)]
        contract_id: String,

        /// Human-readable contract name
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Source repository URL
        #[arg(long)]
        source_url: Option<String>,

        /// Publisher Stellar address
        #[arg(long)]
        publisher: String,
    },

    /// Show a publisher
    Publisher {
        /// Publisher ID
        id: String,
    },

    /// List the contracts owned by a publisher
    PublisherContracts {
        /// Publisher ID
        id: String,
    },

    /// Show registry statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_target(cli.verbose)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    debug!("API URL: {}", cli.api_url);
    debug!("Network: {:?}", cli.network);

    let client = RegistryClient::new(RegistryConfig::new(cli.api_url))?;
    let format = if cli.json { Format::Json } else { Format::Text };

    match cli.command {
        Commands::Search {
            query,
            category,
            verified_only,
            page,
            page_size,
        } => {
            let params = ContractSearchParams {
                query,
                network: cli.network,
                verified_only: verified_only.then_some(true),
                category,
                page,
                page_size,
                ..Default::default()
            };
            commands::search(&client, params, format).await?;
        }
        Commands::Info { id } => {
            commands::info(&client, &id, format).await?;
        }
        Commands::Versions { id } => {
            commands::versions(&client, &id, format).await?;
        }
        Commands::Publish {
            contract_id,
            name,
            description,
            category,
            tags,
            source_url,
            publisher,
        } => {
            let request = commands::publish_request(
                contract_id,
                name,
                description,
                cli.network,
                category,
                tags.as_deref(),
                source_url,
                publisher,
            );
            commands::publish(&client, request, format).await?;
        }
        Commands::Publisher { id } => {
            commands::publisher(&client, &id, format).await?;
        }
        Commands::PublisherContracts { id } => {
            commands::publisher_contracts(&client, &id, format).await?;
        }
        Commands::Stats => {
            commands::stats(&client, format).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "soroban-registry",
            "--api-url",
            "http://registry:3001",
            "search",
            "--query",
            "swap",
            "--verified-only",
            "--network",
            "testnet",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://registry:3001");
        assert_eq!(cli.network, Some(Network::Testnet));
        match cli.command {
            Commands::Search {
                query,
                verified_only,
                ..
            } => {
                assert_eq!(query.as_deref(), Some("swap"));
                assert!(verified_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_network() {
        let result = Cli::try_parse_from([
            "soroban-registry",
            "--network",
            "devnet",
            "stats",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_publish_requires_publisher() {
        let result = Cli::try_parse_from([
            "soroban-registry",
            "publish",
            "--contract-id",
            "CABC",
            "--name",
            "Token",
        ]);
        assert!(result.is_err());
    }
}
