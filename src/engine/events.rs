// ==========================================
// ARIAC 评分引擎 - 评分事件发布
// ==========================================
// 职责: 定义评分事件发布 trait, 传输方式由外部实现
// 说明: 控制器只依赖 trait, 发布失败不影响评分
// ==========================================

use crate::domain::types::{OrderId, SimTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// 评分事件类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEventType {
    /// 订单开始
    OrderStarted,
    /// 配套货运已评分
    KittingShipmentScored,
    /// 装配货运已评分
    AssemblyShipmentScored,
    /// 检测到机械臂互撞
    CollisionDetected,
    /// 比赛结束
    RunFinished,
}

impl ScoreEventType {
    pub fn as_str(&self) -> &str {
        match self {
            ScoreEventType::OrderStarted => "OrderStarted",
            ScoreEventType::KittingShipmentScored => "KittingShipmentScored",
            ScoreEventType::AssemblyShipmentScored => "AssemblyShipmentScored",
            ScoreEventType::CollisionDetected => "CollisionDetected",
            ScoreEventType::RunFinished => "RunFinished",
        }
    }
}

/// 评分事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub event_type: ScoreEventType,
    /// 仿真时间
    pub sim_time: SimTime,
    pub order_id: Option<OrderId>,
    pub shipment_type: Option<String>,
    /// 事件发生后的相关得分 (货运总分或整场总分)
    pub score: Option<f64>,
}

impl ScoreEvent {
    /// 整场级事件
    pub fn run_level(event_type: ScoreEventType, sim_time: SimTime, score: Option<f64>) -> Self {
        Self {
            event_type,
            sim_time,
            order_id: None,
            shipment_type: None,
            score,
        }
    }

    /// 货运级事件
    pub fn shipment(
        event_type: ScoreEventType,
        sim_time: SimTime,
        order_id: &str,
        shipment_type: &str,
        score: f64,
    ) -> Self {
        Self {
            event_type,
            sim_time,
            order_id: Some(order_id.to_string()),
            shipment_type: Some(shipment_type.to_string()),
            score: Some(score),
        }
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 评分事件发布者
///
/// 由外部传输层实现 (消息总线/日志采集等)
pub trait ScoreEventPublisher: Send + Sync {
    fn publish(&self, event: ScoreEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl ScoreEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: ScoreEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpEventPublisher: 跳过事件发布 - event_type={}, sim_time={}",
            event.event_type.as_str(),
            event.sim_time
        );
        Ok(())
    }
}

/// 内存记录发布者 (测试与离线回放)
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<ScoreEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 已记录事件的快照
    pub fn events(&self) -> Vec<ScoreEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ScoreEventPublisher for RecordingPublisher {
    fn publish(&self, event: ScoreEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut guard = self
            .events
            .lock()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        guard.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_publisher() {
        let publisher = NoOpEventPublisher;
        let event = ScoreEvent::run_level(ScoreEventType::RunFinished, 10.0, Some(0.0));
        assert!(publisher.publish(event).is_ok());
    }

    #[test]
    fn test_recording_publisher_keeps_order() {
        let publisher = RecordingPublisher::new();
        publisher
            .publish(ScoreEvent::run_level(ScoreEventType::CollisionDetected, 1.0, None))
            .unwrap();
        publisher
            .publish(ScoreEvent::shipment(
                ScoreEventType::KittingShipmentScored,
                2.0,
                "order_0",
                "order_0_kitting_shipment_0",
                3.0,
            ))
            .unwrap();

        let events = publisher.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, ScoreEventType::CollisionDetected);
        assert_eq!(events[1].order_id.as_deref(), Some("order_0"));
        assert_eq!(events[1].score, Some(3.0));
    }
}
