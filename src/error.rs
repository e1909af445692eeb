use thiserror::Error;

/// 核心计算错误：表头缺列 / 数据格式错误
///
/// 两类错误都会中止整次计算，不会产生部分结果。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    #[error("CSV must include headers: [item, supplier, price] (missing: {})", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Line {line}: invalid {field} value '{value}': {reason}")]
    Format {
        line: u64,
        field: String,
        value: String,
        reason: String,
    },
}

impl InsightError {
    /// 给调用方使用的错误分类
    pub fn kind(&self) -> &'static str {
        match self {
            InsightError::Schema { .. } => "schema",
            InsightError::Format { .. } => "format",
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
