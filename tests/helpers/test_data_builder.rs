// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use ariac_scoring::domain::pose::Pose;
use ariac_scoring::domain::product::{
    AssemblyShipment, KittingShipment, ObservedProduct, Product,
};
use ariac_scoring::domain::order::Order;
use ariac_scoring::domain::types::Priority;

/// 原点附近的位姿 (无旋转)
pub fn pose_at(x: f64, y: f64) -> Pose {
    Pose::from_xyz_rpy(x, y, 0.0, 0.0, 0.0, 0.0)
}

pub fn product(product_type: &str, x: f64, y: f64) -> Product {
    Product::new(product_type, false, pose_at(x, y))
}

pub fn observed(name: &str, x: f64, y: f64) -> ObservedProduct {
    ObservedProduct {
        name: name.to_string(),
        is_faulty: false,
        pose: pose_at(x, y),
    }
}

// ==========================================
// KittingShipment 构建器
// ==========================================

pub struct KittingShipmentBuilder {
    shipment_type: String,
    agv_id: String,
    assembly_station: String,
    products: Vec<Product>,
}

impl KittingShipmentBuilder {
    pub fn new(shipment_type: &str) -> Self {
        Self {
            shipment_type: shipment_type.to_string(),
            agv_id: "any".to_string(),
            assembly_station: "as1".to_string(),
            products: Vec::new(),
        }
    }

    pub fn agv(mut self, agv: &str) -> Self {
        self.agv_id = agv.to_string();
        self
    }

    pub fn station(mut self, station: &str) -> Self {
        self.assembly_station = station.to_string();
        self
    }

    pub fn product(mut self, product_type: &str, x: f64, y: f64) -> Self {
        self.products.push(product(product_type, x, y));
        self
    }

    pub fn faulty_product(mut self, product_type: &str, x: f64, y: f64) -> Self {
        self.products.push(Product::new(product_type, true, pose_at(x, y)));
        self
    }

    pub fn build(self) -> KittingShipment {
        KittingShipment {
            shipment_type: self.shipment_type,
            agv_id: self.agv_id,
            assembly_station: self.assembly_station,
            products: self.products,
        }
    }
}

// ==========================================
// AssemblyShipment 构建器
// ==========================================

pub struct AssemblyShipmentBuilder {
    shipment_type: String,
    assembly_station: String,
    products: Vec<Product>,
}

impl AssemblyShipmentBuilder {
    pub fn new(shipment_type: &str) -> Self {
        Self {
            shipment_type: shipment_type.to_string(),
            assembly_station: "as1".to_string(),
            products: Vec::new(),
        }
    }

    pub fn station(mut self, station: &str) -> Self {
        self.assembly_station = station.to_string();
        self
    }

    pub fn product(mut self, product_type: &str, x: f64, y: f64) -> Self {
        self.products.push(product(product_type, x, y));
        self
    }

    pub fn build(self) -> AssemblyShipment {
        AssemblyShipment {
            shipment_type: self.shipment_type,
            assembly_station: self.assembly_station,
            products: self.products,
        }
    }
}

// ==========================================
// Order 构建器
// ==========================================

pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(order_id: &str) -> Self {
        Self {
            order: Order {
                order_id: order_id.to_string(),
                ..Order::default()
            },
        }
    }

    pub fn start_time(mut self, start_time: f64) -> Self {
        self.order.start_time = start_time;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.order.priority = priority;
        self
    }

    pub fn allowed_time(mut self, allowed_time: f64) -> Self {
        self.order.allowed_time = allowed_time;
        self
    }

    pub fn kitting(mut self, shipment: KittingShipment) -> Self {
        self.order.kitting_shipments.push(shipment);
        self.order.has_kitting_task = true;
        self
    }

    pub fn assembly(mut self, shipment: AssemblyShipment) -> Self {
        self.order.assembly_shipments.push(shipment);
        self.order.has_assembly_task = true;
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}
