// ==========================================
// ARIAC 评分引擎 - 报告错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("CSV 缓冲区刷新失败: {0}")]
    Flush(String),

    #[error("CSV 输出不是合法 UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;
