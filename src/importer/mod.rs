// ==========================================
// ARIAC 评分引擎 - 导入层
// ==========================================
// 职责: 读取运行脚本 (订单定义 + 仿真事件), 回放到运行控制器
// 支持: JSON
// ==========================================

pub mod error;
pub mod run_script;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use run_script::{RunEvent, RunScript};
