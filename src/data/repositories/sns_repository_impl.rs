use async_trait::async_trait;
use base64::{prelude::BASE64_STANDARD, Engine as _};
use tracing::{debug, info};

use crate::{
    data::{
        datasources::{
            signing_cert_datasource::{SigningCertDatasource, SigningCertDatasourceImpl},
            sns_api_datasource::{SnsApiDatasource, SnsApiDatasourceImpl},
            utils::{build_signable_string, decode_certificate, validate_signature},
        },
        models::sns_api::{
            confirm_subscription_response_model::ConfirmSubscriptionResponseModel,
            unsubscribe_response_model::UnsubscribeResponseModel,
        },
    },
    domain::{
        entities::{
            notification_outcome::NotificationOutcome,
            sns_notification::{NotificationType, SnsNotification},
            subscription_response::{ConfirmationResponse, UnsubscribeResponse},
        },
        repositories::sns_repository::SnsRepository,
    },
    errors::{SnsError, SubscriptionError, VerificationError},
};

pub struct SnsRepositoryImpl<A: SigningCertDatasource, B: SnsApiDatasource> {
    signing_cert_datasource: A,
    sns_api_datasource: B,
}

#[async_trait]
impl<A: SigningCertDatasource, B: SnsApiDatasource> SnsRepository for SnsRepositoryImpl<A, B> {
    async fn verify(&self, notification: &SnsNotification) -> Result<(), VerificationError> {
        let signature = non_empty(&notification.signature).ok_or(
            VerificationError::MissingField {
                field: "Signature",
            },
        )?;
        let signing_cert_url = non_empty(&notification.signing_cert_url).ok_or(
            VerificationError::MissingField {
                field: "SigningCertURL",
            },
        )?;

        // Must fail before any outbound request.
        let signature = BASE64_STANDARD
            .decode(signature)
            .map_err(VerificationError::MalformedSignature)?;

        let pem = self
            .signing_cert_datasource
            .fetch_certificate(signing_cert_url)
            .await?;
        let certificate = decode_certificate(&pem)?;

        validate_signature(
            &certificate,
            &build_signable_string(notification),
            &signature,
        )?;
        debug!(
            message_id = notification.message_id.as_deref().unwrap_or_default(),
            "notification signature verified"
        );
        Ok(())
    }

    async fn confirm_subscription(
        &self,
        notification: &SnsNotification,
    ) -> Result<ConfirmationResponse, SubscriptionError> {
        let subscribe_url =
            non_empty(&notification.subscribe_url).ok_or(SubscriptionError::MissingSubscribeUrl)?;
        let response = self
            .sns_api_datasource
            .confirm_subscription(subscribe_url)
            .await?;
        Ok(ConfirmationResponse::from_model(response))
    }

    async fn unsubscribe(
        &self,
        notification: &SnsNotification,
    ) -> Result<UnsubscribeResponse, SubscriptionError> {
        // No local check: a missing URL fails as a request error.
        let unsubscribe_url = notification.unsubscribe_url.as_deref().unwrap_or_default();
        let response = self.sns_api_datasource.unsubscribe(unsubscribe_url).await?;
        Ok(UnsubscribeResponse::from_model(response))
    }

    async fn handle_notification(
        &self,
        notification: &SnsNotification,
    ) -> Result<NotificationOutcome, SnsError> {
        self.verify(notification).await?;

        match &notification.notification_type {
            NotificationType::SubscriptionConfirmation => {
                info!(
                    topic_arn = notification.topic_arn.as_deref().unwrap_or_default(),
                    "confirming subscription"
                );
                let response = self
                    .confirm_subscription(notification)
                    .await
                    .map_err(SnsError::ConfirmSubscription)?;
                info!(
                    subscription_arn = %response.subscription_arn,
                    request_id = %response.request_id,
                    "subscription confirmed"
                );
                Ok(NotificationOutcome::SubscriptionConfirmed(response))
            }
            NotificationType::Notification => {
                info!(
                    message_id = notification.message_id.as_deref().unwrap_or_default(),
                    topic_arn = notification.topic_arn.as_deref().unwrap_or_default(),
                    "notification received"
                );
                Ok(NotificationOutcome::Notification {
                    message: notification.message.clone(),
                })
            }
            NotificationType::UnsubscribeConfirmation => {
                info!(
                    topic_arn = notification.topic_arn.as_deref().unwrap_or_default(),
                    "endpoint unsubscribed"
                );
                Ok(NotificationOutcome::UnsubscribeConfirmation)
            }
            NotificationType::Unknown(other) => {
                debug!(notification_type = %other, "ignoring unrecognized message type");
                Ok(NotificationOutcome::Other(other.clone()))
            }
        }
    }
}

impl SnsRepositoryImpl<SigningCertDatasourceImpl, SnsApiDatasourceImpl> {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self {
            signing_cert_datasource: SigningCertDatasourceImpl::new(client.clone()),
            sns_api_datasource: SnsApiDatasourceImpl::new(client),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ConfirmationResponse {
    fn from_model(model: ConfirmSubscriptionResponseModel) -> Self {
        Self {
            subscription_arn: model.confirm_subscription_result.subscription_arn,
            request_id: model.response_metadata.request_id,
        }
    }
}

impl UnsubscribeResponse {
    fn from_model(model: UnsubscribeResponseModel) -> Self {
        Self {
            request_id: model.response_metadata.request_id,
        }
    }
}
