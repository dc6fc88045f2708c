//! Error types for the registry client

use std::fmt;

use thiserror::Error;

/// Registry API operation, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetContracts,
    GetContract,
    GetContractVersions,
    PublishContract,
    GetPublisher,
    GetPublisherContracts,
    GetStats,
}

impl Operation {
    /// Fixed human-readable failure message for this operation
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::GetContracts => "Failed to fetch contracts",
            Operation::GetContract => "Failed to fetch contract",
            Operation::GetContractVersions => "Failed to fetch contract versions",
            Operation::PublishContract => "Failed to publish contract",
            Operation::GetPublisher => "Failed to fetch publisher",
            Operation::GetPublisherContracts => "Failed to fetch publisher contracts",
            Operation::GetStats => "Failed to fetch stats",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Registry client error
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport failure (DNS, connection refused, timeout, body read)
    #[error("{operation}: network error: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Server rejected the request with a 4xx status
    #[error("{operation}: client error {status}")]
    Client {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Server failed with a 5xx (or otherwise unsuccessful) status
    #[error("{operation}: server error {status}")]
    Server {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Success status, but the body is not the expected JSON shape
    #[error("{operation}: invalid response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Build the status-class error for an unsuccessful response
    pub(crate) fn from_status(operation: Operation, status: u16, body: String) -> Self {
        if (400..500).contains(&status) {
            RegistryError::Client {
                operation,
                status,
                body,
            }
        } else {
            RegistryError::Server {
                operation,
                status,
                body,
            }
        }
    }

    /// Operation that failed, if the error came from a request
    pub fn operation(&self) -> Option<Operation> {
        match self {
            RegistryError::Network { operation, .. }
            | RegistryError::Client { operation, .. }
            | RegistryError::Server { operation, .. }
            | RegistryError::Decode { operation, .. } => Some(*operation),
            RegistryError::Config(_) => None,
        }
    }

    /// HTTP status for client and server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Client { status, .. } | RegistryError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
