// ==========================================
// ARIAC 评分引擎 - 核心库
// ==========================================
// 职责: 配套/装配货运评分, 订单与整场比赛的分数聚合
// 输出: 文本报告与 CSV 行
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与评分聚合
pub mod domain;

// 引擎层 - 评分规则与运行控制
pub mod engine;

// 导入层 - 运行脚本
pub mod importer;

// 配置层 - 评分参数
pub mod config;

// 报告层 - 文本与 CSV
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OrderId, Priority, SimTime};

// 领域实体
pub use domain::{
    determine_model_id, determine_model_type, trim_namespace, Assembly, AssemblyScore,
    AssemblyShipment, GameScore, Kit, KittingShipment, ObservedProduct, Order, OrderScore, Pose,
    Product, ShipmentScore,
};

// 引擎
pub use engine::{RunController, ScoringError, ShipmentScorer};

// 配置
pub use config::ScoringConfig;

// 导入
pub use importer::{ImportError, RunEvent, RunScript};

// 报告
pub use report::{CsvExport, ReportError};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "ARIAC 评分引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
