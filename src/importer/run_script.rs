// ==========================================
// ARIAC 评分引擎 - 运行脚本
// ==========================================
// 输入: JSON { "orders": [...], "events": [...] }
// 事件按仿真时间非递减排列, 以 "kind" 字段区分类型
// 回放: 依次调用 RunController 的修改入口, 结尾保证比赛已结束
// ==========================================

use crate::domain::order::Order;
use crate::domain::product::{AssemblyShipment, KittingShipment, ObservedProduct};
use crate::domain::types::{OrderId, SimTime};
use crate::engine::controller::RunController;
use crate::engine::error::ScoringError;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ==========================================
// RunEvent - 仿真事件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunEvent {
    OrderStarted {
        time: SimTime,
        order_id: OrderId,
    },

    /// AGV 送达工位, 托盘上的观测作为提交
    KittingSubmitted {
        time: SimTime,
        order_id: OrderId,
        shipment_type: String,
        agv_id: String,
        assembly_station: String,
        #[serde(default)]
        products: Vec<ObservedProduct>,
    },

    /// 工位上的装配件提交评估
    AssemblySubmitted {
        time: SimTime,
        order_id: OrderId,
        shipment_type: String,
        assembly_station: String,
        #[serde(default)]
        products: Vec<ObservedProduct>,
    },

    TimeUpdate {
        time: SimTime,
        order_id: OrderId,
        time_taken: f64,
    },

    ArmCollision {
        time: SimTime,
    },

    RunFinished {
        time: SimTime,
        total_process_time: f64,
    },
}

impl RunEvent {
    pub fn time(&self) -> SimTime {
        match self {
            RunEvent::OrderStarted { time, .. }
            | RunEvent::KittingSubmitted { time, .. }
            | RunEvent::AssemblySubmitted { time, .. }
            | RunEvent::TimeUpdate { time, .. }
            | RunEvent::ArmCollision { time }
            | RunEvent::RunFinished { time, .. } => *time,
        }
    }
}

// ==========================================
// RunScript - 运行脚本
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunScript {
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub events: Vec<RunEvent>,
}

impl RunScript {
    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(json: &str) -> ImportResult<Self> {
        let mut script: RunScript = serde_json::from_str(json)?;
        script.normalize_orders();
        script.validate()?;
        Ok(script)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let script = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            orders = script.orders.len(),
            events = script.events.len(),
            "运行脚本加载完成"
        );
        Ok(script)
    }

    /// 脚本中最后一个事件的时间
    pub fn end_time(&self) -> SimTime {
        self.events.last().map(RunEvent::time).unwrap_or(0.0)
    }

    /// 校验: 订单 ID 唯一, 事件时间有限且非递减
    pub fn validate(&self) -> ImportResult<()> {
        let mut seen = HashSet::new();
        for order in &self.orders {
            if !seen.insert(order.order_id.as_str()) {
                return Err(ImportError::DuplicateOrder(order.order_id.clone()));
            }
        }

        let mut previous = f64::NEG_INFINITY;
        for (index, event) in self.events.iter().enumerate() {
            let time = event.time();
            if !time.is_finite() {
                return Err(ImportError::ValidationError {
                    index,
                    message: format!("事件时间不是有限值: {}", time),
                });
            }
            if time < previous {
                return Err(ImportError::ValidationError {
                    index,
                    message: format!("事件时间倒退: {} < {}", time, previous),
                });
            }
            previous = time;
        }
        Ok(())
    }

    /// 回放全部事件
    ///
    /// 脚本没有 run_finished 事件时, 以最后一个事件时间结束比赛
    pub fn replay(&self, controller: &mut RunController) -> ImportResult<()> {
        controller.register_orders(self.orders.iter().cloned())?;

        let mut finished = false;
        for (index, event) in self.events.iter().enumerate() {
            tracing::debug!(index, time = event.time(), "回放事件");
            apply_event(controller, event)
                .map_err(|source| ImportError::ReplayError { index, source })?;
            if matches!(event, RunEvent::RunFinished { .. }) {
                finished = true;
            }
        }

        if !finished {
            let end_time = self.end_time();
            tracing::warn!(end_time, "运行脚本缺少 run_finished 事件, 以最后事件时间结束");
            controller.finish(end_time);
        }
        Ok(())
    }

    /// 订单未显式声明任务标记时, 按货运列表推断
    fn normalize_orders(&mut self) {
        for order in &mut self.orders {
            order.has_kitting_task |= !order.kitting_shipments.is_empty();
            order.has_assembly_task |= !order.assembly_shipments.is_empty();
        }
    }
}

fn apply_event(
    controller: &mut RunController,
    event: &RunEvent,
) -> Result<(), ScoringError> {
    match event {
        RunEvent::OrderStarted { time, order_id } => {
            controller.start_order(order_id, *time)?;
        }
        RunEvent::KittingSubmitted {
            time,
            order_id,
            shipment_type,
            agv_id,
            assembly_station,
            products,
        } => {
            let shipment = KittingShipment::from_observations(
                shipment_type.as_str(),
                agv_id.as_str(),
                assembly_station.as_str(),
                products,
            );
            controller.record_kitting_submission(order_id, &shipment, *time)?;
        }
        RunEvent::AssemblySubmitted {
            time,
            order_id,
            shipment_type,
            assembly_station,
            products,
        } => {
            let shipment = AssemblyShipment::from_observations(
                shipment_type.as_str(),
                assembly_station.as_str(),
                products,
            );
            controller.record_assembly_submission(order_id, &shipment, *time)?;
        }
        RunEvent::TimeUpdate {
            order_id,
            time_taken,
            ..
        } => {
            controller.update_time_taken(order_id, *time_taken)?;
        }
        RunEvent::ArmCollision { time } => controller.set_arm_collision(*time),
        RunEvent::RunFinished {
            total_process_time, ..
        } => {
            controller.finish(*total_process_time);
        }
    }
    Ok(())
}
