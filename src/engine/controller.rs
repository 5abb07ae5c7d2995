// ==========================================
// ARIAC 评分引擎 - 运行控制器
// ==========================================
// 职责: 独占整场评分 (GameScore), 提供受控的修改入口
// 输入: 订单定义、订单开始、货运提交、碰撞、时间更新
// 输出: 只读的 GameScore 供报告/导出使用
// ==========================================
// 红线: 单写者; 所有修改同步串行进行, 不加锁
// 红线: 碰撞标记一旦置位, 本场内不再清除
// ==========================================

use crate::config::ScoringConfig;
use crate::domain::game_score::GameScore;
use crate::domain::order::{sort_by_start_time, Order};
use crate::domain::order_score::OrderScore;
use crate::domain::product::{AssemblyShipment, KittingShipment};
use crate::domain::score::{AssemblyScore, ShipmentScore};
use crate::domain::types::{OrderId, SimTime};
use crate::engine::error::{ScoringError, ScoringResult};
use crate::engine::events::{NoOpEventPublisher, ScoreEvent, ScoreEventPublisher, ScoreEventType};
use crate::engine::scorer::ShipmentScorer;
use std::collections::BTreeMap;
use std::sync::Arc;

// ==========================================
// RunController - 运行控制器
// ==========================================
pub struct RunController {
    scorer: ShipmentScorer,
    orders: BTreeMap<OrderId, Order>,
    game_score: GameScore,
    publisher: Arc<dyn ScoreEventPublisher>,
}

impl RunController {
    /// 使用空操作事件发布者创建
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_publisher(config, Arc::new(NoOpEventPublisher))
    }

    pub fn with_publisher(config: ScoringConfig, publisher: Arc<dyn ScoreEventPublisher>) -> Self {
        Self {
            scorer: ShipmentScorer::new(config),
            orders: BTreeMap::new(),
            game_score: GameScore::new(),
            publisher,
        }
    }

    // ==========================================
    // 订单定义
    // ==========================================

    /// 注册订单定义; 同一 ID 只能注册一次
    pub fn register_order(&mut self, order: Order) -> ScoringResult<()> {
        if self.orders.contains_key(&order.order_id) {
            return Err(ScoringError::DuplicateOrder(order.order_id));
        }
        tracing::debug!(
            order_id = %order.order_id,
            kitting_shipments = order.kitting_shipments.len(),
            assembly_shipments = order.assembly_shipments.len(),
            "注册订单"
        );
        self.orders.insert(order.order_id.clone(), order);
        Ok(())
    }

    pub fn register_orders(&mut self, orders: impl IntoIterator<Item = Order>) -> ScoringResult<()> {
        for order in orders {
            self.register_order(order)?;
        }
        Ok(())
    }

    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// 按触发时间排序的订单定义
    pub fn orders_by_start_time(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.values().cloned().collect();
        sort_by_start_time(&mut orders);
        orders
    }

    // ==========================================
    // 评分修改入口
    // ==========================================

    /// 订单开始: 为每个请求的货运创建零分条目
    ///
    /// 重复开始同一订单不会重置已有评分
    pub fn start_order(&mut self, order_id: &str, sim_time: SimTime) -> ScoringResult<&OrderScore> {
        let order = self
            .orders
            .get(order_id)
            .ok_or_else(|| ScoringError::UnknownOrder(order_id.to_string()))?;

        if self.game_score.order_score(order_id).is_some() {
            tracing::warn!(order_id, "订单已开始, 忽略重复的开始请求");
        } else {
            tracing::info!(order_id, sim_time, priority = %order.priority, "订单开始");
            self.game_score
                .insert_order_score(OrderScore::for_order(order, sim_time));
            self.publish(ScoreEvent {
                event_type: ScoreEventType::OrderStarted,
                sim_time,
                order_id: Some(order_id.to_string()),
                shipment_type: None,
                score: None,
            });
        }

        self.game_score
            .order_score(order_id)
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))
    }

    /// 记录一次配套货运提交并评分
    ///
    /// 按 `submitted.shipment_type` 找到订单中的货运定义。
    /// 重复提交时分项按最新一次重新计算, 提交标记与首次提交时间保持不变。
    pub fn record_kitting_submission(
        &mut self,
        order_id: &str,
        submitted: &KittingShipment,
        sim_time: SimTime,
    ) -> ScoringResult<&ShipmentScore> {
        let order = self
            .orders
            .get(order_id)
            .ok_or_else(|| ScoringError::UnknownOrder(order_id.to_string()))?;
        let expected = order
            .kitting_shipment(&submitted.shipment_type)
            .ok_or_else(|| ScoringError::UnknownShipment {
                order_id: order_id.to_string(),
                shipment_type: submitted.shipment_type.clone(),
            })?;

        let mut scored = self.scorer.score_kitting(expected, submitted, sim_time);

        let entry = self
            .game_score
            .order_score_mut(order_id)
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))?
            .kitting_entry_mut(&submitted.shipment_type)
            .ok_or_else(|| ScoringError::UnknownShipment {
                order_id: order_id.to_string(),
                shipment_type: submitted.shipment_type.clone(),
            })?;

        if entry.is_submitted {
            tracing::warn!(
                order_id,
                shipment_type = %submitted.shipment_type,
                first_submit_time = entry.submit_time,
                "配套货运重复提交, 按最新提交重新评分"
            );
            scored.submit_time = entry.submit_time;
        }
        *entry = scored;
        let total = entry.total();

        tracing::info!(
            order_id,
            shipment_type = %submitted.shipment_type,
            agv = %submitted.agv_id,
            station = %submitted.assembly_station,
            total,
            "配套货运已评分"
        );
        self.publish(ScoreEvent::shipment(
            ScoreEventType::KittingShipmentScored,
            sim_time,
            order_id,
            &submitted.shipment_type,
            total,
        ));

        self.game_score
            .order_score(order_id)
            .and_then(|o| o.kitting_shipment_scores().get(&submitted.shipment_type))
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))
    }

    /// 记录一次装配货运提交并评分
    pub fn record_assembly_submission(
        &mut self,
        order_id: &str,
        submitted: &AssemblyShipment,
        sim_time: SimTime,
    ) -> ScoringResult<&AssemblyScore> {
        let order = self
            .orders
            .get(order_id)
            .ok_or_else(|| ScoringError::UnknownOrder(order_id.to_string()))?;
        let expected = order
            .assembly_shipment(&submitted.shipment_type)
            .ok_or_else(|| ScoringError::UnknownShipment {
                order_id: order_id.to_string(),
                shipment_type: submitted.shipment_type.clone(),
            })?;

        let mut scored = self.scorer.score_assembly(expected, submitted, sim_time);

        let entry = self
            .game_score
            .order_score_mut(order_id)
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))?
            .assembly_entry_mut(&submitted.shipment_type)
            .ok_or_else(|| ScoringError::UnknownShipment {
                order_id: order_id.to_string(),
                shipment_type: submitted.shipment_type.clone(),
            })?;

        if entry.is_submitted {
            tracing::warn!(
                order_id,
                shipment_type = %submitted.shipment_type,
                first_submit_time = entry.submit_time,
                "装配货运重复评估, 按最新提交重新评分"
            );
            scored.submit_time = entry.submit_time;
        }
        *entry = scored;
        let total = entry.total();

        tracing::info!(
            order_id,
            shipment_type = %submitted.shipment_type,
            station = %submitted.assembly_station,
            total,
            "装配货运已评分"
        );
        self.publish(ScoreEvent::shipment(
            ScoreEventType::AssemblyShipmentScored,
            sim_time,
            order_id,
            &submitted.shipment_type,
            total,
        ));

        self.game_score
            .order_score(order_id)
            .and_then(|o| o.assembly_shipment_scores().get(&submitted.shipment_type))
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))
    }

    /// 更新订单已花费时间 (调度方随仿真推进调用)
    pub fn update_time_taken(&mut self, order_id: &str, time_taken: f64) -> ScoringResult<()> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| ScoringError::UnknownOrder(order_id.to_string()))?;
        let score = self
            .game_score
            .order_score_mut(order_id)
            .ok_or_else(|| ScoringError::OrderNotStarted(order_id.to_string()))?;

        order.time_taken = time_taken;
        score.set_time_taken(time_taken);

        if order.is_overdue(time_taken) {
            tracing::warn!(
                order_id,
                time_taken,
                allowed_time = order.allowed_time,
                "订单已超过允许时间"
            );
        }
        Ok(())
    }

    /// 记录机械臂互撞; 整场得分归零且不可恢复
    pub fn set_arm_collision(&mut self, sim_time: SimTime) {
        if self.game_score.was_arm_arm_collision() {
            tracing::debug!(sim_time, "碰撞标记已置位");
            return;
        }
        tracing::warn!(sim_time, "检测到机械臂互撞, 整场得分归零");
        self.game_score.flag_arm_collision();
        self.publish(ScoreEvent::run_level(
            ScoreEventType::CollisionDetected,
            sim_time,
            Some(0.0),
        ));
    }

    /// 结束比赛, 记录总处理时间
    pub fn finish(&mut self, total_process_time: f64) -> &GameScore {
        self.game_score.set_total_process_time(total_process_time);
        let total = self.game_score.total();
        tracing::info!(
            total_process_time,
            total,
            orders = self.game_score.order_scores().len(),
            collision = self.game_score.was_arm_arm_collision(),
            "比赛结束"
        );
        self.publish(ScoreEvent::run_level(
            ScoreEventType::RunFinished,
            total_process_time,
            Some(total),
        ));
        &self.game_score
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn game_score(&self) -> &GameScore {
        &self.game_score
    }

    pub fn into_game_score(self) -> GameScore {
        self.game_score
    }

    pub fn scorer(&self) -> &ShipmentScorer {
        &self.scorer
    }

    fn publish(&self, event: ScoreEvent) {
        let event_type = event.event_type;
        if let Err(e) = self.publisher.publish(event) {
            tracing::warn!("评分事件发布失败: event_type={}, error={}", event_type.as_str(), e);
        }
    }
}
