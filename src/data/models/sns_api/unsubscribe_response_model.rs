use serde::Deserialize;

use super::common::ResponseMetadata;

/// Body returned when visiting an `UnsubscribeURL`.
///
/// https://docs.aws.amazon.com/sns/latest/api/API_Unsubscribe.html
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsubscribeResponseModel {
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}
