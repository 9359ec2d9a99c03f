use anyhow::{Context, Result};
use dotenvy::dotenv;
use product_scraper::scraper::{DEFAULT_CATEGORY, DEFAULT_SITE_ORIGIN};
use product_scraper::SiteConfig;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub project_name: String,
    pub site_origin: String,
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
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            project_name: env::var("PROJECT_NAME")
                .unwrap_or_else(|_| "Crawler Service".to_string()),
            site_origin: env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_SITE_ORIGIN.to_string()),
            default_category: env::var("DEFAULT_CATEGORY")
                .unwrap_or_else(|_| DEFAULT_CATEGORY.to_string()),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn site_config(&self) -> SiteConfig {
        SiteConfig::new(&self.site_origin, &self.default_category)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
