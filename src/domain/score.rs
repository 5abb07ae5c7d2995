// ==========================================
// ARIAC 评分引擎 - 货运评分结果
// ==========================================
// 配套货运与装配货运共用同一结构, 仅路由校验不同:
// - 配套: AGV + 目标工位
// - 装配: 仅工位
// 红线: 路由错误时总分强制为 0, 不保留任何部分得分
// ==========================================

use crate::domain::types::SimTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Trait: RoutingCheck
// ==========================================
pub trait RoutingCheck {
    /// 路由是否完全正确 (决定是否清零)
    fn is_routed_correctly(&self) -> bool;
}

/// 配套货运路由: AGV + 目标工位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KittingRouting {
    /// 使用了指定的 AGV
    pub correct_agv: bool,
    /// 送到了指定的工位
    pub correct_destination: bool,
}

impl RoutingCheck for KittingRouting {
    fn is_routed_correctly(&self) -> bool {
        self.correct_agv && self.correct_destination
    }
}

/// 装配货运路由: 仅工位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssemblyRouting {
    /// 在指定工位完成装配
    pub correct_station: bool,
}

impl RoutingCheck for AssemblyRouting {
    fn is_routed_correctly(&self) -> bool {
        self.correct_station
    }
}

// ==========================================
// ShipmentOutcome - 单个货运的评分
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentOutcome<R> {
    pub shipment_type: String,

    // ===== 分项得分 (非负) =====
    pub product_only_type_presence: f64,
    pub product_type_and_color_presence: f64,
    pub all_products_bonus: f64,
    pub product_pose: f64,

    /// 所有参考产品均已匹配
    pub is_complete: bool,

    /// 已提交评估 (装配中称为 evaluated); 一旦置位不再清除
    pub is_submitted: bool,

    pub routing: R,

    /// 提交时的仿真时间
    pub submit_time: SimTime,
}

pub type ShipmentScore = ShipmentOutcome<KittingRouting>;
pub type AssemblyScore = ShipmentOutcome<AssemblyRouting>;

impl<R: RoutingCheck + Default> ShipmentOutcome<R> {
    /// 零分条目 (订单开始时为每个请求的货运创建)
    pub fn pending(shipment_type: impl Into<String>) -> Self {
        Self {
            shipment_type: shipment_type.into(),
            product_only_type_presence: 0.0,
            product_type_and_color_presence: 0.0,
            all_products_bonus: 0.0,
            product_pose: 0.0,
            is_complete: false,
            is_submitted: false,
            routing: R::default(),
            submit_time: 0.0,
        }
    }
}

impl<R: RoutingCheck> ShipmentOutcome<R> {
    /// 总分
    ///
    /// 路由不正确时为 0, 否则为四个分项之和
    pub fn total(&self) -> f64 {
        if !self.routing.is_routed_correctly() {
            return 0.0;
        }
        self.product_only_type_presence
            + self.product_type_and_color_presence
            + self.all_products_bonus
            + self.product_pose
    }

    /// 标记为已提交; 重复调用保留首次提交时间
    pub fn mark_submitted(&mut self, submit_time: SimTime) {
        if self.is_submitted {
            return;
        }
        self.is_submitted = true;
        self.submit_time = submit_time;
    }
}

impl ShipmentScore {
    pub fn correct_agv(&self) -> bool {
        self.routing.correct_agv
    }

    pub fn correct_destination(&self) -> bool {
        self.routing.correct_destination
    }
}

impl AssemblyScore {
    pub fn correct_station(&self) -> bool {
        self.routing.correct_station
    }

    pub fn is_evaluated(&self) -> bool {
        self.is_submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(correct_agv: bool, correct_destination: bool) -> ShipmentScore {
        ShipmentScore {
            product_only_type_presence: 2.0,
            product_type_and_color_presence: 2.0,
            all_products_bonus: 2.0,
            product_pose: 1.5,
            routing: KittingRouting {
                correct_agv,
                correct_destination,
            },
            ..ShipmentScore::pending("s0")
        }
    }

    #[test]
    fn test_wrong_agv_voids_score() {
        assert_eq!(scored(false, true).total(), 0.0);
        assert_eq!(scored(false, false).total(), 0.0);
    }

    #[test]
    fn test_wrong_destination_voids_score() {
        assert_eq!(scored(true, false).total(), 0.0);
    }

    #[test]
    fn test_correct_routing_sums_components() {
        assert_eq!(scored(true, true).total(), 7.5);
    }

    #[test]
    fn test_assembly_zero_floor_uses_station_only() {
        let mut score = AssemblyScore {
            product_only_type_presence: 1.0,
            product_pose: 1.0,
            ..AssemblyScore::pending("a0")
        };
        assert_eq!(score.total(), 0.0);
        score.routing.correct_station = true;
        assert_eq!(score.total(), 2.0);
    }

    #[test]
    fn test_mark_submitted_is_sticky() {
        let mut score = ShipmentScore::pending("s0");
        assert!(!score.is_submitted);
        score.mark_submitted(12.5);
        score.mark_submitted(40.0);
        assert!(score.is_submitted);
        assert_eq!(score.submit_time, 12.5);
    }

    #[test]
    fn test_pending_is_zero() {
        let score = ShipmentScore::pending("s0");
        assert_eq!(score.total(), 0.0);
        assert!(!score.is_complete);
        assert!(!score.correct_agv());
    }
}
