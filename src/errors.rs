//! Error types for notification verification and the subscription round trips.

use thiserror::Error;

/// Reasons a notification failed authenticity verification.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// `Signature` or `SigningCertURL` is absent or empty.
    #[error("notification is missing {field}")]
    MissingField { field: &'static str },

    #[error("signature is not valid base64: {0}")]
    MalformedSignature(#[source] base64::DecodeError),

    /// Network error, non-2xx status, or unreadable body.
    #[error("failed to fetch signing certificate from {url}: {reason}")]
    CertificateFetchFailed { url: String, reason: String },

    #[error("signing certificate contains no PEM block: {0}")]
    InvalidCertificateEncoding(#[source] pem::PemError),

    #[error("signing certificate could not be parsed: {0}")]
    CertificateParseFailed(#[source] openssl::error::ErrorStack),

    #[error("signature does not match notification: {reason}")]
    SignatureMismatch { reason: String },
}

/// Failures of the confirm / unsubscribe round trips.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    /// Raised before any request is sent.
    #[error("notification does not have a SubscribeURL")]
    MissingSubscribeUrl,

    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("failed to parse response: {reason}")]
    ResponseParseFailed { reason: String },
}

/// Error surfaced at the HTTP boundary, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum SnsError {
    #[error("while binding notification: {0}")]
    MalformedNotification(#[source] serde_json::Error),

    #[error("while validating signature: {0}")]
    Verification(#[from] VerificationError),

    #[error("while confirming subscription: {0}")]
    ConfirmSubscription(#[source] SubscriptionError),

    #[error("while unsubscribing: {0}")]
    Unsubscribe(#[source] SubscriptionError),

    #[error("while building HTTP client: {reason}")]
    Config { reason: String },
}

impl SnsError {
    /// Suggested HTTP status for the inbound request that produced this error.
    ///
    /// Signature check failures are the sender's fault (400); malformed input
    /// and transport failures while binding or fetching are 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Verification(VerificationError::CertificateFetchFailed { .. }) => 500,
            Self::Verification(_) => 400,
            Self::MalformedNotification(_)
            | Self::ConfirmSubscription(_)
            | Self::Unsubscribe(_)
            | Self::Config { .. } => 500,
        }
    }

    /// Whether the notification must be treated as unauthenticated.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::Verification(_))
    }
}
