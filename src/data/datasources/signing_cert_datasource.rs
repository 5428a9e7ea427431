use async_trait::async_trait;
use tracing::debug;

use crate::errors::VerificationError;

#[async_trait]
pub trait SigningCertDatasource: Send + Sync {
    /// Downloads the PEM-encoded signing certificate referenced by a
    /// notification's `SigningCertURL`.
    ///
    /// The certificate is fetched on every call; nothing is cached or pinned,
    /// and the host is not checked against the SNS domains.
    async fn fetch_certificate(&self, url: &str) -> Result<Vec<u8>, VerificationError>;
}

pub struct SigningCertDatasourceImpl {
    client: reqwest::Client,
}

#[async_trait]
impl SigningCertDatasource for SigningCertDatasourceImpl {
    async fn fetch_certificate(&self, url: &str) -> Result<Vec<u8>, VerificationError> {
        let fetch_failed = |reason: String| VerificationError::CertificateFetchFailed {
            url: url.to_string(),
            reason,
        };

        debug!(url, "fetching signing certificate");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_failed(format!("callout failed to send; {e}")))?;

        if !response.status().is_success() {
            return Err(fetch_failed(format!(
                "callout returned with {} status code",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_failed(format!("failed to read response body; {e}")))?;
        Ok(body.to_vec())
    }
}

impl SigningCertDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}
