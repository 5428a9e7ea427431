use serde::Deserialize;

use super::common::ResponseMetadata;

/// Body returned when visiting a `SubscribeURL`.
///
/// https://docs.aws.amazon.com/sns/latest/api/API_ConfirmSubscription.html
///
/// Missing elements decode to empty strings rather than failing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSubscriptionResponseModel {
    #[serde(default)]
    pub confirm_subscription_result: ConfirmSubscriptionResult,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSubscriptionResult {
    #[serde(default)]
    pub subscription_arn: String,
}
