use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("fractic-sns/", env!("CARGO_PKG_VERSION"));

pub(crate) const CONFIRM_SUBSCRIPTION_ROOT: &str = "ConfirmSubscriptionResponse";
pub(crate) const UNSUBSCRIBE_ROOT: &str = "UnsubscribeResponse";
