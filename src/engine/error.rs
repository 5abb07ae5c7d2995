// ==========================================
// ARIAC 评分引擎 - 运行控制错误类型
// ==========================================
// 说明: 评分计算本身不会失败, 这里只覆盖调用方传入未知标识的情况
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("订单不存在: {0}")]
    UnknownOrder(String),

    #[error("订单重复注册: {0}")]
    DuplicateOrder(String),

    #[error("订单尚未开始: {0}")]
    OrderNotStarted(String),

    #[error("订单 {order_id} 中不存在货运: {shipment_type}")]
    UnknownShipment {
        order_id: String,
        shipment_type: String,
    },
}

/// Result 类型别名
pub type ScoringResult<T> = Result<T, ScoringError>;
