// ==========================================
// ARIAC 评分引擎 - 订单定义
// ==========================================
// 职责: 描述一个订单请求的货运、时间窗口与中断阈值
// 生命周期: 配置加载时创建, 之后只读 (time_taken 由调度方更新)
// ==========================================

use crate::domain::product::{AssemblyShipment, KittingShipment};
use crate::domain::types::{OrderId, Priority, SimTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 中断阈值哨兵值: 永不中断
pub const NEVER_INTERRUPT: i32 = -1;

fn never_interrupt() -> i32 {
    NEVER_INTERRUPT
}

fn unbounded_time() -> f64 {
    f64::INFINITY
}

// ==========================================
// Order - 订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,

    /// 订单触发的仿真时间
    #[serde(default)]
    pub start_time: SimTime,

    /// 出现多少个不需要的产品后中断上一个订单 (-1: 永不)
    #[serde(default = "never_interrupt")]
    pub interrupt_on_unwanted_products: i32,

    /// 出现多少个需要的产品后中断上一个订单 (-1: 永不)
    #[serde(default = "never_interrupt")]
    pub interrupt_on_wanted_products: i32,

    /// 允许完成订单的仿真秒数, 默认无限
    /// JSON 中省略或为 null 表示无限
    #[serde(
        default = "unbounded_time",
        deserialize_with = "deserialize_allowed_time",
        serialize_with = "serialize_allowed_time"
    )]
    pub allowed_time: f64,

    #[serde(default)]
    pub kitting_shipments: Vec<KittingShipment>,

    #[serde(default)]
    pub assembly_shipments: Vec<AssemblyShipment>,

    #[serde(default)]
    pub priority: Priority,

    /// 已花费的仿真秒数
    #[serde(default)]
    pub time_taken: f64,

    #[serde(default)]
    pub has_kitting_task: bool,

    #[serde(default)]
    pub has_assembly_task: bool,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            start_time: 0.0,
            interrupt_on_unwanted_products: NEVER_INTERRUPT,
            interrupt_on_wanted_products: NEVER_INTERRUPT,
            allowed_time: f64::INFINITY,
            kitting_shipments: Vec::new(),
            assembly_shipments: Vec::new(),
            priority: Priority::Normal,
            time_taken: 0.0,
            has_kitting_task: false,
            has_assembly_task: false,
        }
    }
}

impl Order {
    /// 不需要产品的中断阈值; None 表示永不中断
    pub fn interrupts_on_unwanted(&self) -> Option<u32> {
        threshold(self.interrupt_on_unwanted_products)
    }

    /// 需要产品的中断阈值; None 表示永不中断
    pub fn interrupts_on_wanted(&self) -> Option<u32> {
        threshold(self.interrupt_on_wanted_products)
    }

    pub fn kitting_shipment(&self, shipment_type: &str) -> Option<&KittingShipment> {
        self.kitting_shipments
            .iter()
            .find(|s| s.shipment_type == shipment_type)
    }

    pub fn assembly_shipment(&self, shipment_type: &str) -> Option<&AssemblyShipment> {
        self.assembly_shipments
            .iter()
            .find(|s| s.shipment_type == shipment_type)
    }

    /// 是否已超过允许时间
    pub fn is_overdue(&self, elapsed: f64) -> bool {
        elapsed > self.allowed_time
    }

    /// 按触发时间比较 (早的在前)
    pub fn cmp_by_start_time(&self, other: &Order) -> Ordering {
        self.start_time.total_cmp(&other.start_time)
    }
}

/// 按触发时间就地排序 (稳定排序, 同时触发的保持原有顺序)
pub fn sort_by_start_time(orders: &mut [Order]) {
    orders.sort_by(|a, b| a.cmp_by_start_time(b));
}

fn threshold(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

fn deserialize_allowed_time<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::INFINITY))
}

fn serialize_allowed_time<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() {
        serializer.serialize_some(value)
    } else {
        serializer.serialize_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_at(id: &str, start_time: f64) -> Order {
        Order {
            order_id: id.to_string(),
            start_time,
            ..Order::default()
        }
    }

    #[test]
    fn test_default_order_never_interrupts() {
        let order = Order::default();
        assert_eq!(order.interrupts_on_unwanted(), None);
        assert_eq!(order.interrupts_on_wanted(), None);
        assert!(order.allowed_time.is_infinite());
        assert!(!order.is_overdue(1.0e9));
    }

    #[test]
    fn test_interrupt_thresholds() {
        let order = Order {
            interrupt_on_unwanted_products: 2,
            interrupt_on_wanted_products: 0,
            ..Order::default()
        };
        assert_eq!(order.interrupts_on_unwanted(), Some(2));
        assert_eq!(order.interrupts_on_wanted(), Some(0));
    }

    #[test]
    fn test_sort_by_start_time() {
        let mut orders = vec![order_at("b", 30.0), order_at("a", 0.0), order_at("c", 30.0)];
        sort_by_start_time(&mut orders);
        let ids: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_overdue() {
        let order = Order {
            allowed_time: 100.0,
            ..Order::default()
        };
        assert!(!order.is_overdue(100.0));
        assert!(order.is_overdue(100.5));
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"order_id":"order_0","allowed_time":null,"priority":3}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "order_0");
        assert!(order.allowed_time.is_infinite());
        assert_eq!(order.interrupt_on_wanted_products, NEVER_INTERRUPT);
        assert_eq!(order.priority, Priority::High);

        let round_trip = serde_json::to_string(&order).unwrap();
        assert!(round_trip.contains("\"allowed_time\":null"));
    }
}
