use std::time::Duration;

use crate::{
    constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    errors::SnsError,
};

/// Settings for the outbound HTTP calls (certificate fetch, confirm,
/// unsubscribe).
#[derive(Debug, Clone)]
pub struct SnsConfig {
    /// Deadline for each outbound request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SnsConfig {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client, SnsError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        builder.build().map_err(|e| SnsError::Config {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_bounded_deadline() {
        let config = SnsConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert!(config.user_agent.starts_with("fractic-sns/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = SnsConfig::default()
            .with_timeout(None)
            .with_connect_timeout(Some(Duration::from_millis(250)))
            .with_user_agent("sns-endpoint/1.0");
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.user_agent, "sns-endpoint/1.0");
        assert!(config.build_client().is_ok());
    }
}
