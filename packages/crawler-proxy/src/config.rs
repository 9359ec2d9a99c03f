use anyhow::{Context, Result};
use crawler_api::config::parse_origins;
use dotenvy::dotenv;
use product_scraper::scraper::DEFAULT_CATEGORY;
use std::env;

pub const DEFAULT_CRAWLER_API_URL: &str = "http://localhost:3000/api/v1/products/computers";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub project_name: String,
    /// Base of the scraping API's product routes
    pub crawler_api_url: String,
    pub default_category: String,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            project_name: env::var("PROJECT_NAME")
                .unwrap_or_else(|_| "Service Caller".to_string()),
            crawler_api_url: env::var("CRAWLER_API_URL")
                .unwrap_or_else(|_| DEFAULT_CRAWLER_API_URL.to_string()),
            default_category: env::var("DEFAULT_CATEGORY")
                .unwrap_or_else(|_| DEFAULT_CATEGORY.to_string()),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_overrides() {
        env::set_var("PORT", "8100");
        env::set_var("CRAWLER_API_URL", "http://api.test/api/v1/products/computers");
        env::set_var("DEFAULT_CATEGORY", "tablets");
        env::set_var("CORS_ALLOWED_ORIGINS", " http://localhost:5173 ,,http://app.test");

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8100);
        assert_eq!(config.crawler_api_url, "http://api.test/api/v1/products/computers");
        assert_eq!(config.default_category, "tablets");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://app.test"]
        );

        env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        for key in ["PORT", "CRAWLER_API_URL", "DEFAULT_CATEGORY", "CORS_ALLOWED_ORIGINS"] {
            env::remove_var(key);
        }
    }
}
