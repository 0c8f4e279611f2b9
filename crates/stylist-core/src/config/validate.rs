//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    ///
    /// Run on load and again when a service is built, since fields are public
    /// and may be overridden after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.endpoint must not be empty".into(),
            ));
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.model must not be empty".into(),
            ));
        }
        if self.request.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "request.timeout_ms must be > 0".into(),
            ));
        }
        if self.request.image_fetch_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "request.image_fetch_timeout_ms must be > 0".into(),
            ));
        }
        if self.request.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "request.max_tokens must be > 0".into(),
            ));
        }
        if self.request.language.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "request.language must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = Config::default();
        config.provider.endpoint = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("provider.endpoint"));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.provider.model = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("provider.model"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.request.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let mut config = Config::default();
        config.request.max_tokens = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_tokens"));
    }
}
