//! Network messages - communication between App and Network layers

use crate::models::ApiResponse;

/// Outcome of a backend call, with the error already rendered to its message
pub type CallResult = Result<ApiResponse, String>;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run a status check against the configured backend
    CheckStatus { id: u64 },
    /// GET an arbitrary endpoint from the request console
    Fetch { id: u64, endpoint: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A status check finished
    Status { id: u64, result: CallResult },
    /// A console fetch finished
    Fetched {
        id: u64,
        endpoint: String,
        result: CallResult,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Status { id, .. } => *id,
            NetworkResponse::Fetched { id, .. } => *id,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            NetworkResponse::Status { result, .. } => result.is_ok(),
            NetworkResponse::Fetched { result, .. } => result.is_ok(),
        }
    }
}
