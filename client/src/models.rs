//! Backend payloads only the CLI uses. The controller's own payloads live in `controller::types`.

use serde::{Deserialize, Serialize};

/// Error shape returned with non-2xx statuses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MerkleRootResponse {
    pub root: String,
    pub root_short: Option<String>,
}
