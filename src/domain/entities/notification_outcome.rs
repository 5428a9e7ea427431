use super::subscription_response::ConfirmationResponse;

/// Result of handling one verified inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// A regular notification. The payload is authentic and can be consumed.
    Notification { message: Option<String> },

    /// The pending subscription was activated.
    SubscriptionConfirmed(ConfirmationResponse),

    /// SNS reports the endpoint was unsubscribed. Nothing was called back.
    UnsubscribeConfirmation,

    /// Verified, but of a type this crate does not act on.
    Other(String),
}
