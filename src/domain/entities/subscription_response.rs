/// Acknowledgment returned by SNS when a subscription is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationResponse {
    pub subscription_arn: String,
    pub request_id: String,
}

/// Acknowledgment returned by SNS when a subscription is torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsubscribeResponse {
    pub request_id: String,
}
