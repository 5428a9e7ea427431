use tracing::warn;

use crate::{
    config::SnsConfig,
    data::{
        datasources::{
            signing_cert_datasource::SigningCertDatasourceImpl,
            sns_api_datasource::SnsApiDatasourceImpl,
        },
        repositories::sns_repository_impl::SnsRepositoryImpl,
    },
    domain::{
        entities::{
            notification_outcome::NotificationOutcome,
            sns_notification::SnsNotification,
            subscription_response::{ConfirmationResponse, UnsubscribeResponse},
        },
        repositories::sns_repository::SnsRepository,
    },
    errors::SnsError,
};

/// Entry point for an HTTP endpoint receiving SNS push deliveries.
///
/// Each call works on its own notification and its own freshly fetched
/// certificate, so one instance can be shared across concurrent requests.
pub struct SnsUtil<R: SnsRepository> {
    sns_repository: R,
}

impl<R: SnsRepository> SnsUtil<R> {
    pub fn from_repository(sns_repository: R) -> Self {
        Self { sns_repository }
    }

    /// Binds the raw POST body to a notification.
    pub fn parse_notification(&self, body: &str) -> Result<SnsNotification, SnsError> {
        serde_json::from_str(body).map_err(SnsError::MalformedNotification)
    }

    pub async fn verify(&self, notification: &SnsNotification) -> Result<(), SnsError> {
        Ok(self.sns_repository.verify(notification).await?)
    }

    pub async fn confirm_subscription(
        &self,
        notification: &SnsNotification,
    ) -> Result<ConfirmationResponse, SnsError> {
        self.sns_repository
            .confirm_subscription(notification)
            .await
            .map_err(SnsError::ConfirmSubscription)
    }

    pub async fn unsubscribe(
        &self,
        notification: &SnsNotification,
    ) -> Result<UnsubscribeResponse, SnsError> {
        self.sns_repository
            .unsubscribe(notification)
            .await
            .map_err(SnsError::Unsubscribe)
    }

    /// Full handling of one inbound POST body: bind, verify, and confirm the
    /// subscription if the message asks for it.
    ///
    /// On error, `SnsError::status_code` gives the status to answer with. The
    /// payload of a rejected message must not be acted upon.
    pub async fn handle_notification(&self, body: &str) -> Result<NotificationOutcome, SnsError> {
        let result = match self.parse_notification(body) {
            Ok(notification) => self.sns_repository.handle_notification(&notification).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(error = %e, status = e.status_code(), "rejecting SNS message");
        }
        result
    }
}

impl SnsUtil<SnsRepositoryImpl<SigningCertDatasourceImpl, SnsApiDatasourceImpl>> {
    pub fn new(config: &SnsConfig) -> Result<Self, SnsError> {
        Ok(Self {
            sns_repository: SnsRepositoryImpl::new(config.build_client()?),
        })
    }
}
