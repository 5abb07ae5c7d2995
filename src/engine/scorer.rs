// ==========================================
// ARIAC 评分引擎 - 货运评分器
// ==========================================
// 职责: 将一次提交与订单中的货运定义比对, 产出货运评分
// 输入: 参考货运 (订单定义) + 提交货运 + 提交时间
// 输出: ShipmentScore / AssemblyScore
// ==========================================
// 分项:
// - 类型存在: 基础类型匹配 (忽略颜色)
// - 类型+颜色存在: 完整类型匹配
// - 位姿: 完整类型匹配且位姿在容差内
// - 全部产品奖励: 所有参考产品位姿均正确时给出
// 红线: 缺陷产品只计类型存在分, 不计颜色/位姿分, 也不能完成货运
// ==========================================

mod core;
mod matching;


pub use self::core::ShipmentScorer;
pub use matching::ProductTally;
