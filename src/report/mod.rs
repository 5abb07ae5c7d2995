// ==========================================
// ARIAC 评分引擎 - 报告层
// ==========================================
// 职责: 评分与订单结构的文本渲染、CSV 行导出
// 红线: 只读; 渲染不修改任何评分状态
// ==========================================

pub mod csv;
pub mod error;
pub mod text;

pub use csv::CsvExport;
pub use error::{ReportError, ReportResult};
