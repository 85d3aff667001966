//! Configuration module
//!
//! Handles CLI configuration: backend URL and the session token.

use vision_client::ImageClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the image backend
    pub api_url: String,

    /// Session token, if the backend requires one
    pub token: Option<String>,

    /// Header carrying the session token
    pub token_header: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.token.is_some() && self.token_header.trim().is_empty() {
            anyhow::bail!("token_header cannot be empty when a token is set");
        }

        Ok(())
    }

    /// Builds a backend client from this configuration
    pub fn client(&self) -> ImageClient {
        let client = ImageClient::new(&self.api_url);
        match &self.token {
            Some(token) => client.with_token(&self.token_header, token),
            None => client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "http://localhost:8080".to_string(),
            token: None,
            token_header: "token".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.api_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        config.api_url = "https://vision.example.com/".to_string();
        assert!(config.validate().is_ok());

        config.token = Some("abc".to_string());
        config.token_header = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_api_url() {
        let client = config().client();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
