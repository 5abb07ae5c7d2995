// ==========================================
// ARIAC 评分引擎 - 文本渲染
// ==========================================
// 各实体的 Display 实现; 标签与字段顺序固定, 供日志与终端输出
// 布尔值输出 true/false, 碰撞标记输出 0/1
// ==========================================

use crate::domain::game_score::GameScore;
use crate::domain::order::Order;
use crate::domain::order_score::OrderScore;
use crate::domain::pose::Pose;
use crate::domain::product::{Assembly, AssemblyShipment, Kit, KittingShipment, Product};
use crate::domain::score::{AssemblyScore, ShipmentScore};
use std::fmt;

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (roll, pitch, yaw) = self.rpy();
        write!(
            f,
            "{} {} {} {} {} {}",
            self.position.x, self.position.y, self.position.z, roll, pitch, yaw
        )
    }
}

// ==========================================
// 评分
// ==========================================

impl fmt::Display for ShipmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "kitting_shipment_score")?;
        writeln!(f, "...shipment type: [{}]", self.shipment_type)?;
        writeln!(f, "...completion score: [{}]", self.total())?;
        writeln!(f, "...complete: [{}]", self.is_complete)?;
        writeln!(f, "...submitted: [{}]", self.is_submitted)?;
        writeln!(f, "...used correct agv: [{}]", self.correct_agv())?;
        writeln!(f, "...sent to correct station: [{}]", self.correct_destination())?;
        writeln!(f, "...product type presence score: [{}]", self.product_only_type_presence)?;
        writeln!(f, "...product color presence score: [{}]", self.product_type_and_color_presence)?;
        writeln!(f, "...product pose score: [{}]", self.product_pose)?;
        writeln!(f, "...all products bonus: [{}]", self.all_products_bonus)
    }
}

impl fmt::Display for AssemblyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<assembly_score {}>", self.shipment_type)?;
        writeln!(f, "...completion score: [{}]", self.total())?;
        writeln!(f, "...complete: [{}]", self.is_complete)?;
        writeln!(f, "...evaluated: [{}]", self.is_evaluated())?;
        writeln!(f, "...product type presence score: [{}]", self.product_only_type_presence)?;
        writeln!(f, "...product color presence score: [{}]", self.product_type_and_color_presence)?;
        writeln!(f, "...all products bonus: [{}]", self.all_products_bonus)?;
        writeln!(f, "...product pose score: [{}]", self.product_pose)?;
        writeln!(f, "...correct assembly station: [{}]", self.correct_station())?;
        writeln!(f, "</assembly_score>")
    }
}

impl fmt::Display for OrderScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order score")?;
        writeln!(f, "...order ID [{}]", self.order_id())?;
        writeln!(f, "...total order score: [{}]", self.compute_kitting_total())?;
        writeln!(f, "...completion score: [{}]", self.compute_kitting_completion_score())?;
        writeln!(f, "...time taken: [{}]", self.time_taken())?;
        writeln!(f, "...kitting complete: [{}]", self.is_kitting_complete())?;
        writeln!(f, "...priority: [{}]", self.priority())?;
        for score in self.kitting_shipment_scores().values() {
            writeln!(f, "{score}")?;
        }
        if self.has_assembly_task() {
            for score in self.assembly_shipment_scores().values() {
                writeln!(f, "{score}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<game_score>")?;
        writeln!(f, "...total game score: [{}]", self.total())?;
        writeln!(f, "...total process time: [{}]", self.total_process_time())?;
        writeln!(f, "...arms collision?: [{}]", u8::from(self.was_arm_arm_collision()))?;
        for score in self.order_scores().values() {
            writeln!(f, "{score}")?;
        }
        writeln!(f, "</game_score>")
    }
}

// ==========================================
// 订单结构
// ==========================================

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  <product>")?;
        writeln!(f, "    <type>{}</type>", self.product_type)?;
        writeln!(f, "    <faulty>{}</faulty>", self.is_faulty)?;
        writeln!(f, "    <pose>{}</pose>", self.pose)?;
        writeln!(f, "  </product>")
    }
}

impl fmt::Display for KittingShipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<kitting_shipment type='{}' agv='{}' station='{}'>",
            self.shipment_type, self.agv_id, self.assembly_station
        )?;
        for product in &self.products {
            write!(f, "\n{product}")?;
        }
        writeln!(f, "</kitting_shipment>")
    }
}

impl fmt::Display for AssemblyShipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<assembly_shipment type='{}' station='{}'>",
            self.shipment_type, self.assembly_station
        )?;
        for product in &self.products {
            write!(f, "\n{product}")?;
        }
        writeln!(f, "</assembly_shipment>")
    }
}

impl fmt::Display for Kit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<kit type='{}'>", self.kit_type)?;
        for object in &self.objects {
            writeln!(f)?;
            write_object(f, object)?;
        }
        write!(f, "\n</kit>\n")
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<assembly type='{}'>", self.assembly_type)?;
        for object in &self.objects {
            writeln!(f)?;
            write_object(f, object)?;
        }
        write!(f, "\n</assembly>\n")
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<order start_time = {}>", self.start_time)?;
        if self.has_kitting_task {
            for shipment in &self.kitting_shipments {
                writeln!(f, "{shipment}")?;
            }
        }
        if self.has_assembly_task {
            for shipment in &self.assembly_shipments {
                writeln!(f, "{shipment}")?;
            }
        }
        writeln!(f, "</order>")
    }
}

/// 配套/装配中的对象块
fn write_object(f: &mut fmt::Formatter<'_>, object: &Product) -> fmt::Result {
    writeln!(f, "<object>")?;
    writeln!(f, "...type: [{}]", object.product_type)?;
    writeln!(f, "...faulty: [{}]", object.is_faulty)?;
    writeln!(f, "...pose: [{}]", object.pose)?;
    writeln!(f, "</object>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::KitObject;
    use crate::domain::types::Priority;

    fn sample_product() -> Product {
        Product::new("gear_part_red", false, Pose::from_xyz_rpy(0.1, -0.2, 0.0, 0.0, 0.0, 0.0))
    }

    #[test]
    fn test_shipment_score_labels_in_order() {
        let mut score = ShipmentScore::pending("order_0_kitting_shipment_0");
        score.product_pose = 1.0;
        score.routing.correct_agv = true;
        score.routing.correct_destination = true;

        let text = score.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "kitting_shipment_score",
                "...shipment type: [order_0_kitting_shipment_0]",
                "...completion score: [1]",
                "...complete: [false]",
                "...submitted: [false]",
                "...used correct agv: [true]",
                "...sent to correct station: [true]",
                "...product type presence score: [0]",
                "...product color presence score: [0]",
                "...product pose score: [1]",
                "...all products bonus: [0]",
            ]
        );
    }

    #[test]
    fn test_assembly_score_block() {
        let score = AssemblyScore::pending("order_1_assembly_shipment_0");
        let text = score.to_string();
        assert!(text.starts_with("<assembly_score order_1_assembly_shipment_0>\n"));
        assert!(text.contains("...evaluated: [false]\n"));
        assert!(text.ends_with("</assembly_score>\n"));
    }

    #[test]
    fn test_game_score_reports_collision_as_digit() {
        let order = Order {
            order_id: "order_0".to_string(),
            priority: Priority::High,
            ..Order::default()
        };
        let mut game = GameScore::with_orders(vec![OrderScore::for_order(&order, 0.0)]);
        game.flag_arm_collision();

        let text = game.to_string();
        assert!(text.starts_with("<game_score>\n...total game score: [0]\n"));
        assert!(text.contains("...arms collision?: [1]\n"));
        assert!(text.contains("order score\n...order ID [order_0]\n"));
        assert!(text.contains("...priority: [3]\n"));
        assert!(text.ends_with("</game_score>\n"));
    }

    #[test]
    fn test_product_block() {
        let text = sample_product().to_string();
        assert_eq!(
            text,
            "  <product>\n    <type>gear_part_red</type>\n    <faulty>false</faulty>\n    \
             <pose>0.1 -0.2 0 0 0 0</pose>\n  </product>\n"
        );
    }

    #[test]
    fn test_kitting_shipment_block() {
        let shipment = KittingShipment {
            shipment_type: "order_0_kitting_shipment_0".to_string(),
            agv_id: "agv1".to_string(),
            assembly_station: "as2".to_string(),
            products: vec![sample_product()],
        };
        let text = shipment.to_string();
        assert!(text.starts_with(
            "<kitting_shipment type='order_0_kitting_shipment_0' agv='agv1' station='as2'>\n  <product>"
        ));
        assert!(text.ends_with("  </product>\n</kitting_shipment>\n"));
    }

    #[test]
    fn test_kit_renders_objects() {
        let objects: Vec<KitObject> = vec![sample_product()];
        let kit = Kit {
            kit_type: "kit_0".to_string(),
            objects,
        };
        let text = kit.to_string();
        assert!(text.starts_with("<kit type='kit_0'>\n<object>\n...type: [gear_part_red]\n"));
        assert!(text.ends_with("</object>\n\n</kit>\n"));
    }

    #[test]
    fn test_order_skips_absent_tasks() {
        let order = Order {
            order_id: "order_0".to_string(),
            start_time: 5.0,
            kitting_shipments: vec![KittingShipment {
                shipment_type: "order_0_kitting_shipment_0".to_string(),
                agv_id: "any".to_string(),
                assembly_station: "as1".to_string(),
                products: Vec::new(),
            }],
            has_kitting_task: false,
            ..Order::default()
        };
        assert_eq!(order.to_string(), "<order start_time = 5>\n</order>\n");
    }
}
