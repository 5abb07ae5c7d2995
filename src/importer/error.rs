// ==========================================
// ARIAC 评分引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::error::ScoringError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("JSON 解析失败: {0}")]
    JsonParseError(String),

    // ===== 数据校验错误 =====
    #[error("运行脚本校验失败 (事件 {index}): {message}")]
    ValidationError { index: usize, message: String },

    #[error("订单定义重复: {0}")]
    DuplicateOrder(String),

    // ===== 回放错误 =====
    #[error("事件回放失败 (事件 {index}): {source}")]
    ReplayError {
        index: usize,
        #[source]
        source: ScoringError,
    },

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
