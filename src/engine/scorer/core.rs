use super::matching::{tally_products, ProductTally};
use crate::config::ScoringConfig;
use crate::domain::product::{AssemblyShipment, KittingShipment};
use crate::domain::score::{
    AssemblyRouting, AssemblyScore, KittingRouting, RoutingCheck, ShipmentOutcome, ShipmentScore,
};
use crate::domain::types::SimTime;

// ==========================================
// ShipmentScorer - 货运评分器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ShipmentScorer {
    config: ScoringConfig,
}

impl ShipmentScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评分一次配套货运提交
    ///
    /// # 参数
    /// - `expected`: 订单中的货运定义
    /// - `submitted`: 实际提交 (AGV/工位为实际去向)
    /// - `submit_time`: 提交时的仿真时间
    pub fn score_kitting(
        &self,
        expected: &KittingShipment,
        submitted: &KittingShipment,
        submit_time: SimTime,
    ) -> ShipmentScore {
        let routing = KittingRouting {
            correct_agv: self.is_correct_agv(&expected.agv_id, &submitted.agv_id),
            correct_destination: expected.assembly_station == submitted.assembly_station,
        };
        let tally = tally_products(&expected.products, &submitted.products, &self.config);

        let score = self.build_outcome(&expected.shipment_type, tally, routing, submit_time);

        tracing::debug!(
            shipment_type = %expected.shipment_type,
            correct_agv = routing.correct_agv,
            correct_destination = routing.correct_destination,
            type_matches = tally.type_matches,
            color_matches = tally.color_matches,
            pose_matches = tally.pose_matches,
            total = score.total(),
            "配套货运评分完成"
        );

        score
    }

    /// 评分一次装配货运提交
    pub fn score_assembly(
        &self,
        expected: &AssemblyShipment,
        submitted: &AssemblyShipment,
        submit_time: SimTime,
    ) -> AssemblyScore {
        let routing = AssemblyRouting {
            correct_station: expected.assembly_station == submitted.assembly_station,
        };
        let tally = tally_products(&expected.products, &submitted.products, &self.config);

        let score = self.build_outcome(&expected.shipment_type, tally, routing, submit_time);

        tracing::debug!(
            shipment_type = %expected.shipment_type,
            correct_station = routing.correct_station,
            type_matches = tally.type_matches,
            color_matches = tally.color_matches,
            pose_matches = tally.pose_matches,
            total = score.total(),
            "装配货运评分完成"
        );

        score
    }

    /// AGV 是否正确: 定义为 "any" 或与提交一致
    pub fn is_correct_agv(&self, expected_agv: &str, submitted_agv: &str) -> bool {
        expected_agv == self.config.any_agv || expected_agv == submitted_agv
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn build_outcome<R: RoutingCheck + Default>(
        &self,
        shipment_type: &str,
        tally: ProductTally,
        routing: R,
        submit_time: SimTime,
    ) -> ShipmentOutcome<R> {
        let is_complete = tally.is_complete();
        let all_products_bonus = if is_complete {
            tally.expected as f64 * self.config.all_products_bonus_points
        } else {
            0.0
        };

        let mut outcome = ShipmentOutcome::pending(shipment_type);
        outcome.product_only_type_presence = tally.type_matches as f64 * self.config.type_presence_points;
        outcome.product_type_and_color_presence =
            tally.color_matches as f64 * self.config.color_presence_points;
        outcome.product_pose = tally.pose_matches as f64 * self.config.pose_points;
        outcome.all_products_bonus = all_products_bonus;
        outcome.is_complete = is_complete;
        outcome.routing = routing;
        outcome.mark_submitted(submit_time);
        outcome
    }
}
