// Scraping API: catalog listing, product detail and single-page endpoints
pub mod config;
pub mod server;

pub use config::Config;
