// ==========================================
// ARIAC 评分引擎 - 产品与货运模型
// ==========================================
// 职责: 产品值对象、配套/装配货运、参考 Kit/Assembly
// 红线: 产品构造后不可变, 逻辑类型只由名称约定推导
// ==========================================

use crate::domain::identity::{determine_model_id, determine_model_type};
use crate::domain::pose::Pose;
use crate::domain::types::{AssemblyShipmentType, KitType, KittingShipmentType};
use serde::{Deserialize, Serialize};

// ==========================================
// ObservedProduct - 仿真上报的原始观测
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedProduct {
    /// 实体实例名 (可含命名空间与实例后缀)
    pub name: String,

    #[serde(default)]
    pub is_faulty: bool,

    #[serde(default)]
    pub pose: Pose,
}

impl ObservedProduct {
    /// 实例 ID
    pub fn instance_id(&self) -> String {
        determine_model_id(&self.name)
    }
}

// ==========================================
// Product - 产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 逻辑产品类型, 颜色编码在最后一段, 例如 "assembly_battery_red"
    #[serde(rename = "type")]
    pub product_type: String,

    #[serde(default)]
    pub is_faulty: bool,

    /// 产品应放置/实际放置的位姿
    #[serde(default)]
    pub pose: Pose,
}

/// Kit 中的参考对象
pub type KitObject = Product;

/// 装配件中的参考对象
pub type AssemblyObject = Product;

impl Product {
    pub fn new(product_type: impl Into<String>, is_faulty: bool, pose: Pose) -> Self {
        Self {
            product_type: product_type.into(),
            is_faulty,
            pose,
        }
    }

    /// 由仿真观测转换
    pub fn from_observation(observation: &ObservedProduct) -> Self {
        Self {
            product_type: determine_model_type(&observation.name),
            is_faulty: observation.is_faulty,
            pose: observation.pose,
        }
    }

    /// 颜色 (类型最后一段属于颜色词表时)
    pub fn color<S: AsRef<str>>(&self, colors: &[S]) -> Option<&str> {
        split_color(&self.product_type, colors).1
    }

    /// 去掉颜色后的基础类型
    pub fn base_type<S: AsRef<str>>(&self, colors: &[S]) -> &str {
        split_color(&self.product_type, colors).0
    }
}

/// 把类型拆分为 (基础类型, 颜色)
fn split_color<'a, S: AsRef<str>>(product_type: &'a str, colors: &[S]) -> (&'a str, Option<&'a str>) {
    if let Some(index) = product_type.rfind('_') {
        let candidate = &product_type[index + 1..];
        if index > 0 && colors.iter().any(|c| c.as_ref() == candidate) {
            return (&product_type[..index], Some(candidate));
        }
    }
    (product_type, None)
}

// ==========================================
// KittingShipment - 配套货运
// ==========================================
// 既用于订单中的需求定义, 也用于一次提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KittingShipment {
    pub shipment_type: KittingShipmentType,

    /// 目标 AGV: "agv1".."agv4" 或 "any"
    pub agv_id: String,

    /// 目标工位: "as1".."as4"
    pub assembly_station: String,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl KittingShipment {
    /// 由一组观测构造提交
    pub fn from_observations(
        shipment_type: impl Into<String>,
        agv_id: impl Into<String>,
        assembly_station: impl Into<String>,
        observations: &[ObservedProduct],
    ) -> Self {
        Self {
            shipment_type: shipment_type.into(),
            agv_id: agv_id.into(),
            assembly_station: assembly_station.into(),
            products: observations.iter().map(Product::from_observation).collect(),
        }
    }
}

// ==========================================
// AssemblyShipment - 装配货运 (无 AGV 段)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyShipment {
    pub shipment_type: AssemblyShipmentType,

    pub assembly_station: String,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl AssemblyShipment {
    pub fn from_observations(
        shipment_type: impl Into<String>,
        assembly_station: impl Into<String>,
        observations: &[ObservedProduct],
    ) -> Self {
        Self {
            shipment_type: shipment_type.into(),
            assembly_station: assembly_station.into(),
            products: observations.iter().map(Product::from_observation).collect(),
        }
    }
}

// ==========================================
// Kit / Assembly - 参考定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    pub kit_type: KitType,
    pub objects: Vec<KitObject>,
}

impl From<&KittingShipment> for Kit {
    fn from(shipment: &KittingShipment) -> Self {
        Self {
            kit_type: shipment.shipment_type.clone(),
            objects: shipment.products.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub assembly_type: String,
    pub assembly_station: String,
    pub objects: Vec<AssemblyObject>,
}

impl From<&AssemblyShipment> for Assembly {
    fn from(shipment: &AssemblyShipment) -> Self {
        Self {
            assembly_type: shipment.shipment_type.clone(),
            assembly_station: shipment.assembly_station.clone(),
            objects: shipment.products.clone(),
        }
    }
}
