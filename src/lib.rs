pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{InsightError, Result};
pub use models::{CheapestSummary, InsightReport};
pub use service::{compute_cheapest, compute_insights};
