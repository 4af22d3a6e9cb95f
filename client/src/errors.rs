use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer. `detail` is the backend's error text when it sent one.
    #[error("{status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
