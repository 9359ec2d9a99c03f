// Pass-through front for the scraping API
pub mod client;
pub mod config;
pub mod server;

pub use client::{CrawlerClient, UpstreamBody};
pub use config::Config;
