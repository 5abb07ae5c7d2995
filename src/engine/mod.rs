// ==========================================
// ARIAC 评分引擎 - 引擎层
// ==========================================
// 职责: 货运评分规则与运行期评分状态管理
// 红线: 评分器无状态, 评分状态只由 RunController 修改
// ==========================================

pub mod controller;
pub mod error;
pub mod events;
pub mod scorer;

// 重导出核心引擎
pub use controller::RunController;
pub use error::{ScoringError, ScoringResult};
pub use events::{
    NoOpEventPublisher, RecordingPublisher, ScoreEvent, ScoreEventPublisher, ScoreEventType,
};
pub use scorer::{ProductTally, ShipmentScorer};
