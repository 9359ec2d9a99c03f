// HTTP routes
pub mod crawler;
pub mod health;

pub use crawler::*;
pub use health::*;
