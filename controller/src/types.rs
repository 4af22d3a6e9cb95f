//! Payloads exchanged with the zk-creds backend.
//!
//! The controller only relies on a handful of fields. Everything else the backend returns is kept
//! optional so that older or newer servers still decode.

use serde::{Deserialize, Serialize};

/// A passport file picked by the user, uploaded as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub credential_id: Option<String>,

    /// Where the new commitment landed in the backend's Merkle tree.
    pub stats: Option<IssueStats>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueStats {
    pub commitment: Option<String>,
    pub merkle_index: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub credential_id: String,
    pub min_age: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub proof_valid: bool,
    #[serde(default)]
    pub is_old_enough: bool,

    pub message: Option<String>,
    pub commitment: Option<String>,
    pub details: Option<VerifyDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyDetails {
    pub min_age_required: Option<u8>,
    pub proof_type: Option<String>,
    pub privacy_preserved: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_credentials: u64,
    pub merkle_root: String,

    pub merkle_root_short: Option<String>,
    pub system_status: Option<String>,
}
