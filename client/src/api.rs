use crate::errors::ClientError;
use crate::models::{ErrorBody, HealthResponse, MerkleRootResponse};
use async_trait::async_trait;
use controller::constants::PASSPORT_FIELD;
use controller::types::{FileUpload, IssueResponse, StatsResponse, VerifyRequest, VerifyResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The three calls the demo flow depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn issue_credential(&self, file: FileUpload) -> Result<IssueResponse, ClientError>;

    async fn verify_age(&self, req: VerifyRequest) -> Result<VerifyResponse, ClientError>;

    async fn stats(&self) -> Result<StatsResponse, ClientError>;
}

/// zk-creds backend reached over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "backend url must start with http:// or https://, got {base_url:?}"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("zk-creds-client/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        send_json(self.client.get(self.url("/health"))).await
    }

    pub async fn merkle_root(&self) -> Result<MerkleRootResponse, ClientError> {
        send_json(self.client.get(self.url("/merkle-root"))).await
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn issue_credential(&self, file: FileUpload) -> Result<IssueResponse, ClientError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str("application/json")?;
        let form = Form::new().part(PASSPORT_FIELD, part);

        send_json(self.client.post(self.url("/issue-credential")).multipart(form)).await
    }

    async fn verify_age(&self, req: VerifyRequest) -> Result<VerifyResponse, ClientError> {
        send_json(self.client.post(self.url("/verify-age")).json(&req)).await
    }

    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        send_json(self.client.get(self.url("/stats"))).await
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let parsed = serde_json::from_str::<ErrorBody>(&body);
        let detail = match parsed {
            Ok(e) => e.detail,
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body,
        };
        return Err(ClientError::Status { status, detail });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_url_without_scheme() {
        let err = HttpBackend::new("localhost:8000", None).err().unwrap();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn trims_trailing_slash() {
        let backend = HttpBackend::new("http://127.0.0.1:8000/", None).unwrap();
        assert_eq!(backend.url("/stats"), "http://127.0.0.1:8000/stats");
    }
}
