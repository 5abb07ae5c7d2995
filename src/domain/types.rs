// ==========================================
// ARIAC 评分引擎 - 领域类型定义
// ==========================================
// 职责: 标识类型别名、订单优先级
// ==========================================

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

// ==========================================
// 标识类型别名
// ==========================================
pub type KitType = String;
pub type KittingShipmentType = String;
pub type AssemblyShipmentType = String;
pub type OrderId = String;

/// 仿真时间（秒）
pub type SimTime = f64;

// ==========================================
// 订单优先级 (Priority)
// ==========================================
// 取值只允许 1 或 3, 序列化为整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Priority {
    Normal, // 1
    High,   // 3
}

impl Priority {
    /// 订单总分的乘数
    pub fn factor(&self) -> i32 {
        match self {
            Priority::Normal => 1,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl TryFrom<i32> for Priority {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Normal),
            3 => Ok(Priority::High),
            other => Err(format!("无效的订单优先级: {} (仅允许 1 或 3)", other)),
        }
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        priority.factor()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_factor() {
        assert_eq!(Priority::Normal.factor(), 1);
        assert_eq!(Priority::High.factor(), 3);
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn test_priority_rejects_other_values() {
        assert!(Priority::try_from(2).is_err());
        assert!(Priority::try_from(0).is_err());
        assert_eq!(Priority::try_from(3), Ok(Priority::High));
    }

    #[test]
    fn test_priority_serde_as_integer() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "3");
        let parsed: Priority = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Priority::Normal);
        assert!(serde_json::from_str::<Priority>("5").is_err());
    }
}
