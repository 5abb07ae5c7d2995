// ==========================================
// ARIAC 评分引擎 - 领域模型层
// ==========================================
// 职责: 实体名称解析、产品/货运/订单模型、评分聚合
// 红线: 不含 I/O, 所有计算纯函数且确定
// ==========================================

pub mod game_score;
pub mod identity;
pub mod order;
pub mod order_score;
pub mod pose;
pub mod product;
pub mod score;
pub mod types;

// 重导出核心类型
pub use game_score::GameScore;
pub use identity::{determine_model_id, determine_model_type, trim_namespace};
pub use order::{sort_by_start_time, Order, NEVER_INTERRUPT};
pub use order_score::{OrderScore, ShipmentCounts};
pub use pose::{Pose, Quaternion, Vector3};
pub use product::{
    Assembly, AssemblyObject, AssemblyShipment, Kit, KitObject, KittingShipment, ObservedProduct,
    Product,
};
pub use score::{
    AssemblyRouting, AssemblyScore, KittingRouting, RoutingCheck, ShipmentOutcome, ShipmentScore,
};
pub use types::{
    AssemblyShipmentType, KitType, KittingShipmentType, OrderId, Priority, SimTime,
};
