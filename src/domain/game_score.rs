// ==========================================
// ARIAC 评分引擎 - 整场评分
// ==========================================
// 红线: 发生机械臂互撞时整场得分为 0, 且标记不可清除
// ==========================================

use crate::domain::order_score::OrderScore;
use crate::domain::types::OrderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameScore {
    pub(crate) total_process_time: f64,

    /// 取消资格标记
    pub(crate) was_arm_arm_collision: bool,

    /// 订单 ID → 订单评分
    pub(crate) order_scores_map: BTreeMap<OrderId, OrderScore>,
}

impl GameScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由已有订单评分构造 (只读报告场景)
    pub fn with_orders(orders: impl IntoIterator<Item = OrderScore>) -> Self {
        Self {
            order_scores_map: orders
                .into_iter()
                .map(|o| (o.order_id.clone(), o))
                .collect(),
            ..Self::default()
        }
    }

    pub fn total_process_time(&self) -> f64 {
        self.total_process_time
    }

    pub fn was_arm_arm_collision(&self) -> bool {
        self.was_arm_arm_collision
    }

    pub fn order_scores(&self) -> &BTreeMap<OrderId, OrderScore> {
        &self.order_scores_map
    }

    pub fn order_score(&self, order_id: &str) -> Option<&OrderScore> {
        self.order_scores_map.get(order_id)
    }

    // ==========================================
    // 受控修改 (仅运行控制器)
    // ==========================================

    pub(crate) fn insert_order_score(&mut self, score: OrderScore) {
        self.order_scores_map.insert(score.order_id.clone(), score);
    }

    pub(crate) fn order_score_mut(&mut self, order_id: &str) -> Option<&mut OrderScore> {
        self.order_scores_map.get_mut(order_id)
    }

    /// 置位取消资格标记; 一旦置位不可清除
    pub(crate) fn flag_arm_collision(&mut self) {
        self.was_arm_arm_collision = true;
    }

    pub(crate) fn set_total_process_time(&mut self, seconds: f64) {
        self.total_process_time = seconds;
    }

    /// 整场总分
    pub fn total(&self) -> f64 {
        if self.was_arm_arm_collision {
            return 0.0;
        }
        self.order_scores_map
            .values()
            .fold(0.0, |acc, o| acc + o.compute_kitting_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::score::{KittingRouting, ShipmentScore};
    use crate::domain::types::Priority;

    fn order_score(order_id: &str, points: f64, priority: Priority) -> OrderScore {
        let mut shipments = BTreeMap::new();
        shipments.insert(
            format!("{}_kitting_shipment_0", order_id),
            ShipmentScore {
                product_type_and_color_presence: points,
                is_submitted: true,
                routing: KittingRouting {
                    correct_agv: true,
                    correct_destination: true,
                },
                ..ShipmentScore::pending(format!("{}_kitting_shipment_0", order_id))
            },
        );
        OrderScore {
            order_id: order_id.to_string(),
            priority,
            kitting_shipment_scores: shipments,
            ..OrderScore::default()
        }
    }

    #[test]
    fn test_total_sums_order_totals() {
        let game = GameScore::with_orders(vec![
            order_score("order_0", 4.0, Priority::Normal),
            order_score("order_1", 2.5, Priority::High),
        ]);
        assert_eq!(game.order_scores().len(), 2);
        assert_eq!(game.total(), 4.0 + 7.5);
    }

    #[test]
    fn test_collision_zeroes_total() {
        let mut game = GameScore::new();
        game.insert_order_score(order_score("order_0", 4.0, Priority::High));
        assert_eq!(game.total(), 12.0);
        game.flag_arm_collision();
        assert!(game.was_arm_arm_collision());
        assert_eq!(game.total(), 0.0);
    }

    #[test]
    fn test_empty_game_scores_zero() {
        let total = GameScore::new().total();
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }
}
