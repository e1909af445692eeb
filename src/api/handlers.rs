use crate::error::InsightError;
use crate::service::parser::PRICE_COLUMN;
use crate::service::{compute_cheapest, compute_insights};
use axum::{
    body::Bytes,
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// 请求体: CSV 文本
#[derive(Debug, Deserialize)]
pub struct CsvPayload {
    pub csv_text: String,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub kind: &'static str,
    pub message: String,
}

impl ErrorResponse {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind,
            message: message.into(),
        }
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 比价报告接口 (JSON 提交 CSV 文本)
pub async fn insights(Json(req): Json<CsvPayload>) -> Response {
    match compute_insights(&req.csv_text) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => insight_error(&e),
    }
}

/// 比价报告接口 (直接上传 CSV 文件内容)
pub async fn upload(body: Bytes) -> Response {
    let csv_text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Upload rejected, {} bytes not valid UTF-8: {}", body.len(), e);
            let response = ErrorResponse::new("encoding", "File must be a UTF-8 CSV");
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    match compute_insights(csv_text) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => insight_error(&e),
    }
}

/// 最低价汇总接口 (旧版响应格式)
pub async fn cheapest(Json(req): Json<CsvPayload>) -> Response {
    match compute_cheapest(&req.csv_text) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => insight_error(&e),
    }
}

/// 表头错误和数据错误都属于调用方输入问题：400
fn insight_error(err: &InsightError) -> Response {
    let message = match err {
        InsightError::Format { field, .. } if field == PRICE_COLUMN => {
            format!("Price must be numeric. {}", err)
        }
        _ => err.to_string(),
    };
    let response = ErrorResponse::new(err.kind(), message);
    (StatusCode::BAD_REQUEST, Json(response)).into_response()
}
