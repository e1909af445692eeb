pub mod handlers;

pub use handlers::{cheapest, health_check, insights, upload};

use crate::config::AppConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

/// 构建路由
///
/// - `GET  /health`
/// - `POST /api/insights`         - JSON `{ "csv_text": ... }`
/// - `POST /api/insights/upload`  - 原始 CSV 内容 (UTF-8)
/// - `POST /api/cheapest`         - 旧版最低价汇总
pub fn create_router(config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/insights", post(insights))
        .route("/api/insights/upload", post(upload))
        .route("/api/cheapest", post(cheapest))
        .layer(ServiceBuilder::new().layer(DefaultBodyLimit::max(config.limits.max_body_bytes)))
}
