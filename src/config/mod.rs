// ==========================================
// ARIAC 评分引擎 - 配置层
// ==========================================
// 职责: 评分权重、位姿容差、颜色词表
// 来源: 默认值 → JSON 文件 (ARIAC_SCORING_CONFIG 指定)
// ==========================================

pub mod error;
pub mod scoring_config;

// 重导出核心配置
pub use error::{ConfigError, ConfigResult};
pub use scoring_config::{config_keys, ScoringConfig};
