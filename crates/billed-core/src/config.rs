//! Configuration module
//!
//! Env-driven configuration for the client components: API endpoint and
//! credentials, receipt validation limits, and environment name.

use std::env;

use crate::validation::ALLOWED_RECEIPT_CONTENT_TYPES;

const MAX_RECEIPT_SIZE_MB: usize = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub environment: String,
    pub allowed_receipt_content_types: Vec<String>,
    pub max_receipt_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let api_url = env::var("BILLED_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:5678".to_string());

        let api_token = env::var("BILLED_API_TOKEN")
            .or_else(|_| env::var("API_TOKEN"))
            .ok();

        let allowed_receipt_content_types = env::var("ALLOWED_RECEIPT_CONTENT_TYPES")
            .unwrap_or_else(|_| ALLOWED_RECEIPT_CONTENT_TYPES.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let max_receipt_size_mb = env::var("MAX_RECEIPT_SIZE_MB")
            .unwrap_or_else(|_| MAX_RECEIPT_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_RECEIPT_SIZE_MB);

        Ok(Config {
            api_url,
            api_token,
            environment,
            allowed_receipt_content_types,
            max_receipt_size_bytes: max_receipt_size_mb * 1024 * 1024,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// API token, or an error when the real client path requires one.
    pub fn require_api_token(&self) -> Result<&str, anyhow::Error> {
        self.api_token.as_deref().ok_or_else(|| {
            anyhow::anyhow!("Missing API token. Set BILLED_API_TOKEN or API_TOKEN")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_production() {
        let mut config = Config {
            api_url: "http://localhost:5678".to_string(),
            api_token: None,
            environment: "development".to_string(),
            allowed_receipt_content_types: vec![],
            max_receipt_size_bytes: 0,
        };
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }

    #[test]
    fn test_require_api_token() {
        let config = Config {
            api_url: String::new(),
            api_token: Some("jwt-token".to_string()),
            environment: "test".to_string(),
            allowed_receipt_content_types: vec![],
            max_receipt_size_bytes: 0,
        };
        assert_eq!(config.require_api_token().unwrap(), "jwt-token");

        let config = Config {
            api_token: None,
            ..config
        };
        assert!(config.require_api_token().is_err());
    }
}
