// ==========================================
// ARIAC 评分引擎 - 订单评分
// ==========================================
// 职责: 汇总一个订单内所有请求货运的评分
// 规则:
// - 每个请求的货运一条记录, 订单开始时以零分创建
// - 完成: 所有条目都已提交 (无条目时视为完成)
// - 订单总分 = 完成分 × 优先级 (优先级只在订单层生效)
// ==========================================

use crate::domain::order::Order;
use crate::domain::score::{AssemblyScore, ShipmentScore};
use crate::domain::types::{AssemblyShipmentType, KittingShipmentType, OrderId, Priority, SimTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderScore {
    /// 货运类型 → 评分 (按键有序, 仅影响展示顺序)
    pub(crate) kitting_shipment_scores: BTreeMap<KittingShipmentType, ShipmentScore>,

    pub(crate) assembly_shipment_scores: BTreeMap<AssemblyShipmentType, AssemblyScore>,

    pub(crate) order_id: OrderId,

    /// 在订单上花费的秒数
    pub(crate) time_taken: f64,

    /// 优先级因子 (1 或 3)
    pub(crate) priority: Priority,

    pub(crate) has_kitting_task: bool,
    pub(crate) has_assembly_task: bool,

    /// 订单开始的仿真时间
    pub(crate) start_time: SimTime,
}

impl OrderScore {
    /// 为订单定义创建零分评分, 每个请求的货运一条
    pub fn for_order(order: &Order, start_time: SimTime) -> Self {
        let kitting_shipment_scores = order
            .kitting_shipments
            .iter()
            .map(|s| (s.shipment_type.clone(), ShipmentScore::pending(&s.shipment_type)))
            .collect();

        let assembly_shipment_scores = order
            .assembly_shipments
            .iter()
            .map(|s| (s.shipment_type.clone(), AssemblyScore::pending(&s.shipment_type)))
            .collect();

        Self {
            kitting_shipment_scores,
            assembly_shipment_scores,
            order_id: order.order_id.clone(),
            time_taken: 0.0,
            priority: order.priority,
            has_kitting_task: order.has_kitting_task || !order.kitting_shipments.is_empty(),
            has_assembly_task: order.has_assembly_task || !order.assembly_shipments.is_empty(),
            start_time,
        }
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn time_taken(&self) -> f64 {
        self.time_taken
    }

    pub fn start_time(&self) -> SimTime {
        self.start_time
    }

    pub fn has_kitting_task(&self) -> bool {
        self.has_kitting_task
    }

    pub fn has_assembly_task(&self) -> bool {
        self.has_assembly_task
    }

    pub fn kitting_shipment_scores(&self) -> &BTreeMap<KittingShipmentType, ShipmentScore> {
        &self.kitting_shipment_scores
    }

    pub fn assembly_shipment_scores(&self) -> &BTreeMap<AssemblyShipmentType, AssemblyScore> {
        &self.assembly_shipment_scores
    }

    // ==========================================
    // 受控修改 (仅运行控制器)
    // ==========================================

    pub(crate) fn kitting_entry_mut(&mut self, shipment_type: &str) -> Option<&mut ShipmentScore> {
        self.kitting_shipment_scores.get_mut(shipment_type)
    }

    pub(crate) fn assembly_entry_mut(&mut self, shipment_type: &str) -> Option<&mut AssemblyScore> {
        self.assembly_shipment_scores.get_mut(shipment_type)
    }

    pub(crate) fn set_time_taken(&mut self, time_taken: f64) {
        self.time_taken = time_taken;
    }

    // ==========================================
    // 配套
    // ==========================================

    /// 所有配套货运都已提交时为 true; 没有配套货运时同样为 true
    pub fn is_kitting_complete(&self) -> bool {
        self.kitting_shipment_scores.values().all(|s| s.is_submitted)
    }

    /// 不含优先级的完成分
    pub fn compute_kitting_completion_score(&self) -> f64 {
        self.kitting_shipment_scores
            .values()
            .fold(0.0, |acc, s| acc + s.total())
    }

    /// 订单总分
    pub fn compute_kitting_total(&self) -> f64 {
        self.compute_kitting_completion_score() * f64::from(self.priority.factor())
    }

    // ==========================================
    // 装配
    // ==========================================

    pub fn is_assembly_complete(&self) -> bool {
        self.assembly_shipment_scores.values().all(|s| s.is_submitted)
    }

    pub fn compute_assembly_completion_score(&self) -> f64 {
        self.assembly_shipment_scores
            .values()
            .fold(0.0, |acc, s| acc + s.total())
    }

    pub fn compute_assembly_total(&self) -> f64 {
        self.compute_assembly_completion_score() * f64::from(self.priority.factor())
    }

    // ==========================================
    // 统计
    // ==========================================

    pub fn kitting_counts(&self) -> ShipmentCounts {
        let mut counts = ShipmentCounts {
            requested: self.kitting_shipment_scores.len(),
            ..ShipmentCounts::default()
        };
        for score in self.kitting_shipment_scores.values().filter(|s| s.is_submitted) {
            counts.submitted += 1;
            if score.is_complete {
                counts.completed += 1;
            }
            if !score.correct_agv() {
                counts.wrong_agv += 1;
            }
            if !score.correct_destination() {
                counts.wrong_station += 1;
            }
        }
        counts
    }

    pub fn assembly_counts(&self) -> ShipmentCounts {
        let mut counts = ShipmentCounts {
            requested: self.assembly_shipment_scores.len(),
            ..ShipmentCounts::default()
        };
        for score in self.assembly_shipment_scores.values().filter(|s| s.is_submitted) {
            counts.submitted += 1;
            if score.is_complete {
                counts.completed += 1;
            }
            if !score.correct_station() {
                counts.wrong_station += 1;
            }
        }
        counts
    }
}

/// 按提交/完成/路由状态分类的货运数量
///
/// 完成与路由错误只统计已提交的货运
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShipmentCounts {
    pub requested: usize,
    pub submitted: usize,
    pub completed: usize,
    pub wrong_agv: usize,
    pub wrong_station: usize,
}
