use reqwest::Client;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::types::{CreateUploadRequest, DataEnvelope, UploadRecord};
use crate::traits::{StorageError, StorageResult};
use muxstore_core::MuxConfig;

const UPLOADS_PATH: &str = "/video/v1/uploads";

/// Authenticated handle to the Mux Video API.
///
/// Holds the access token pair for the lifetime of the adapter. Requests use
/// HTTP basic auth with the token id as user and the secret as password.
#[derive(Clone)]
pub struct MuxClient {
    http: Client,
    base_url: String,
    token_id: String,
    token_secret: String,
}

impl Debug for MuxClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MuxClient")
            .field("base_url", &self.base_url)
            .field("token_id", &self.token_id)
            .finish_non_exhaustive()
    }
}

impl MuxClient {
    /// Build a client from a token pair.
    ///
    /// Fails with `MissingCredential` if either secret is absent or empty.
    pub fn new(
        token_id: Option<&str>,
        token_secret: Option<&str>,
        base_url: &str,
    ) -> StorageResult<Self> {
        let token_id = token_id
            .filter(|v| !v.is_empty())
            .ok_or(StorageError::MissingCredential("Token ID"))?;
        let token_secret = token_secret
            .filter(|v| !v.is_empty())
            .ok_or(StorageError::MissingCredential("Token Secret"))?;

        // No request timeout: long uploads rely on transport defaults.
        let http = Client::builder()
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_id: token_id.to_string(),
            token_secret: token_secret.to_string(),
        })
    }

    pub fn from_config(config: &MuxConfig) -> StorageResult<Self> {
        Self::new(
            config.token_id(),
            config.token_secret(),
            config.api_base_url(),
        )
    }

    /// Underlying HTTP client, shared with the upload transport.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /video/v1/uploads`
    pub async fn create_upload(&self, request: &CreateUploadRequest) -> StorageResult<UploadRecord> {
        let url = format!("{}{}", self.base_url, UPLOADS_PATH);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.token_id, Some(&self.token_secret))
            .json(request)
            .send()
            .await
            .map_err(|e| StorageError::SessionCreationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::SessionCreationFailed(format!(
                "{} - {}",
                status, error_text
            )));
        }

        let envelope: DataEnvelope<UploadRecord> = response.json().await.map_err(|e| {
            StorageError::SessionCreationFailed(format!("Failed to parse upload response: {}", e))
        })?;

        Ok(envelope.data)
    }

    /// `GET /video/v1/uploads/{upload_id}`
    pub async fn retrieve_upload(&self, upload_id: &str) -> StorageResult<UploadRecord> {
        let url = format!("{}{}/{}", self.base_url, UPLOADS_PATH, upload_id);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.token_id, Some(&self.token_secret))
            .send()
            .await
            .map_err(|e| StorageError::ResolveFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::ResolveFailed(format!(
                "{} - {}",
                status, error_text
            )));
        }

        let envelope: DataEnvelope<UploadRecord> = response.json().await.map_err(|e| {
            StorageError::ResolveFailed(format!("Failed to parse upload response: {}", e))
        })?;

        Ok(envelope.data)
    }
}
