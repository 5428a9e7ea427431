use async_trait::async_trait;

use crate::{
    domain::entities::{
        notification_outcome::NotificationOutcome,
        sns_notification::SnsNotification,
        subscription_response::{ConfirmationResponse, UnsubscribeResponse},
    },
    errors::{SnsError, SubscriptionError, VerificationError},
};

#[async_trait]
pub trait SnsRepository: Send + Sync {
    /// Checks that the notification was signed by the holder of the
    /// certificate at its `SigningCertURL`.
    async fn verify(&self, notification: &SnsNotification) -> Result<(), VerificationError>;

    /// Visits `SubscribeURL`, activating the pending subscription.
    async fn confirm_subscription(
        &self,
        notification: &SnsNotification,
    ) -> Result<ConfirmationResponse, SubscriptionError>;

    /// Visits `UnsubscribeURL`.
    async fn unsubscribe(
        &self,
        notification: &SnsNotification,
    ) -> Result<UnsubscribeResponse, SubscriptionError>;

    /// Verifies the notification and confirms it if it is a subscription
    /// handshake.
    async fn handle_notification(
        &self,
        notification: &SnsNotification,
    ) -> Result<NotificationOutcome, SnsError>;
}
