// Configuration for IdeaCenterClient

/// Configuration for the IdeaCenter HTTP client
#[derive(Clone, Debug, Default)]
pub struct IdeaCenterClientConfig {
    /// Base URL of the service (e.g. "http://127.0.0.1:84")
    pub base_url: String,
    /// Account email used for authentication
    pub email: String,
    /// Account password used for authentication
    pub password: String,
    /// Connection timeout in milliseconds; transport default when unset
    pub connect_timeout_ms: Option<u64>,
    /// Whole-request timeout in milliseconds; transport default when unset
    pub read_timeout_ms: Option<u64>,
}

impl IdeaCenterClientConfig {
    /// Create a new config pointing at a single base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set authentication credentials
    pub fn with_credentials(mut self, email: &str, password: &str) -> Self {
        self.email = email.to_string();
        self.password = password.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = Some(connect_ms);
        self.read_timeout_ms = Some(read_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = IdeaCenterClientConfig::default();
        assert!(config.base_url.is_empty());
        assert!(config.email.is_empty());
        assert_eq!(config.connect_timeout_ms, None);
        assert_eq!(config.read_timeout_ms, None);
    }

    #[test]
    fn test_config_builder() {
        let config = IdeaCenterClientConfig::new("http://localhost:84")
            .with_credentials("tester@example.com", "secret")
            .with_timeouts(3000, 15000);

        assert_eq!(config.base_url, "http://localhost:84");
        assert_eq!(config.email, "tester@example.com");
        assert_eq!(config.password, "secret");
        assert_eq!(config.connect_timeout_ms, Some(3000));
        assert_eq!(config.read_timeout_ms, Some(15000));
    }
}
