use async_trait::async_trait;
use tracing::debug;

use crate::{
    constants::{CONFIRM_SUBSCRIPTION_ROOT, UNSUBSCRIBE_ROOT},
    data::{
        datasources::utils::parse_xml_response,
        models::sns_api::{
            confirm_subscription_response_model::ConfirmSubscriptionResponseModel,
            unsubscribe_response_model::UnsubscribeResponseModel,
        },
    },
    errors::SubscriptionError,
};

#[async_trait]
pub trait SnsApiDatasource: Send + Sync {
    /// ConfirmSubscription:
    /// https://docs.aws.amazon.com/sns/latest/api/API_ConfirmSubscription.html
    ///
    /// subscribe_url:
    ///   The pre-signed `SubscribeURL` delivered with a
    ///   `SubscriptionConfirmation` message.
    async fn confirm_subscription(
        &self,
        subscribe_url: &str,
    ) -> Result<ConfirmSubscriptionResponseModel, SubscriptionError>;

    /// Unsubscribe:
    /// https://docs.aws.amazon.com/sns/latest/api/API_Unsubscribe.html
    ///
    /// unsubscribe_url:
    ///   The pre-signed `UnsubscribeURL` delivered with a message.
    async fn unsubscribe(
        &self,
        unsubscribe_url: &str,
    ) -> Result<UnsubscribeResponseModel, SubscriptionError>;
}

pub struct SnsApiDatasourceImpl {
    client: reqwest::Client,
}

#[async_trait]
impl SnsApiDatasource for SnsApiDatasourceImpl {
    async fn confirm_subscription(
        &self,
        subscribe_url: &str,
    ) -> Result<ConfirmSubscriptionResponseModel, SubscriptionError> {
        let body = self.callout(subscribe_url, "ConfirmSubscription").await?;
        parse_xml_response(&body, CONFIRM_SUBSCRIPTION_ROOT)
    }

    async fn unsubscribe(
        &self,
        unsubscribe_url: &str,
    ) -> Result<UnsubscribeResponseModel, SubscriptionError> {
        let body = self.callout(unsubscribe_url, "Unsubscribe").await?;
        parse_xml_response(&body, UNSUBSCRIBE_ROOT)
    }
}

impl SnsApiDatasourceImpl {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn callout(&self, url: &str, function_name: &str) -> Result<String, SubscriptionError> {
        let request_failed = |reason: String| SubscriptionError::RequestFailed {
            url: url.to_string(),
            reason: format!("{function_name}; {reason}"),
        };

        debug!(url, function_name, "calling SNS");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed(format!("callout failed to send; {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(request_failed(format!(
                "callout returned with {} status code; {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| request_failed(format!("failed to read response body; {e}")))
    }
}
