use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One inbound message POSTed by Amazon SNS.
///
/// https://docs.aws.amazon.com/sns/latest/dg/sns-message-and-json-formats.html
///
/// Only `Type` is required; every other field is absent on at least one of
/// the message types.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsNotification {
    #[serde(rename = "Type")]
    pub notification_type: NotificationType,
    pub message: Option<String>,
    pub message_id: Option<String>,
    /// Base64-encoded RSA signature over the canonical string.
    pub signature: Option<String>,
    pub signature_version: Option<String>,
    #[serde(rename = "SigningCertURL")]
    pub signing_cert_url: Option<String>,
    /// Only present on `SubscriptionConfirmation` and
    /// `UnsubscribeConfirmation`.
    #[serde(rename = "SubscribeURL")]
    pub subscribe_url: Option<String>,
    pub subject: Option<String>,
    pub timestamp: Option<String>,
    pub token: Option<String>,
    pub topic_arn: Option<String>,
    #[serde(rename = "UnsubscribeURL")]
    pub unsubscribe_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum NotificationType {
    Notification,
    SubscriptionConfirmation,
    UnsubscribeConfirmation,

    #[serde(untagged)]
    Unknown(String),
}

impl NotificationType {
    /// The exact wire value, as it takes part in the signed string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Notification => "Notification",
            Self::SubscriptionConfirmation => "SubscriptionConfirmation",
            Self::UnsubscribeConfirmation => "UnsubscribeConfirmation",
            Self::Unknown(value) => value,
        }
    }
}

impl SnsNotification {
    /// Minimal notification of the given type with every optional field unset.
    pub fn new(notification_type: NotificationType) -> Self {
        Self {
            notification_type,
            message: None,
            message_id: None,
            signature: None,
            signature_version: None,
            signing_cert_url: None,
            subscribe_url: None,
            subject: None,
            timestamp: None,
            token: None,
            topic_arn: None,
            unsubscribe_url: None,
        }
    }

    /// `Timestamp` parsed as RFC 3339. Freshness is left to the caller.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }
}
