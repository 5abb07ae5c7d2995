// ==========================================
// ARIAC 评分引擎 - 评分配置
// ==========================================
// 所有字段都有默认值, JSON 中可只写需要覆写的键
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 配置键 (JSON 字段名, 用于错误信息)
pub mod config_keys {
    pub const POSITION_TOLERANCE: &str = "position_tolerance";
    pub const ORIENTATION_TOLERANCE: &str = "orientation_tolerance";
    pub const COLORS: &str = "colors";
    pub const ANY_AGV: &str = "any_agv";
    pub const TYPE_PRESENCE_POINTS: &str = "type_presence_points";
    pub const COLOR_PRESENCE_POINTS: &str = "color_presence_points";
    pub const POSE_POINTS: &str = "pose_points";
    pub const ALL_PRODUCTS_BONUS_POINTS: &str = "all_products_bonus_points";

    /// 指定配置文件路径的环境变量
    pub const CONFIG_PATH_ENV: &str = "ARIAC_SCORING_CONFIG";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// 位置容差 (米)
    pub position_tolerance: f64,

    /// 姿态容差 (弧度)
    pub orientation_tolerance: f64,

    /// 产品类型最后一段可识别的颜色
    pub colors: Vec<String>,

    /// 货运定义中表示"任意 AGV"的取值
    pub any_agv: String,

    /// 每个类型正确的产品得分
    pub type_presence_points: f64,

    /// 每个类型+颜色正确的产品得分
    pub color_presence_points: f64,

    /// 每个位姿正确的产品得分
    pub pose_points: f64,

    /// 全部产品正确时, 每个产品的奖励分
    pub all_products_bonus_points: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            position_tolerance: 0.03,
            orientation_tolerance: 0.1,
            colors: vec!["red".to_string(), "green".to_string(), "blue".to_string()],
            any_agv: "any".to_string(),
            type_presence_points: 1.0,
            color_presence_points: 1.0,
            pose_points: 1.0,
            all_products_bonus_points: 1.0,
        }
    }
}

impl ScoringConfig {
    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: ScoringConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 按环境变量加载; 未设置时使用默认值
    pub fn load_from_env() -> ConfigResult<Self> {
        match std::env::var(config_keys::CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!("加载评分配置: {}", path.trim());
                Self::from_json_file(path.trim())
            }
            _ => {
                tracing::debug!("未指定评分配置文件, 使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 校验配置值
    ///
    /// - 容差与分值必须为有限非负数
    /// - any_agv 不能为空
    pub fn validate(&self) -> ConfigResult<()> {
        let numeric = [
            (config_keys::POSITION_TOLERANCE, self.position_tolerance),
            (config_keys::ORIENTATION_TOLERANCE, self.orientation_tolerance),
            (config_keys::TYPE_PRESENCE_POINTS, self.type_presence_points),
            (config_keys::COLOR_PRESENCE_POINTS, self.color_presence_points),
            (config_keys::POSE_POINTS, self.pose_points),
            (config_keys::ALL_PRODUCTS_BONUS_POINTS, self.all_products_bonus_points),
        ];

        for (key, value) in numeric {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "必须为有限非负数".to_string(),
                });
            }
        }

        if self.any_agv.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::ANY_AGV.to_string(),
                value: self.any_agv.clone(),
                message: "不能为空".to_string(),
            });
        }

        if let Some(color) = self.colors.iter().find(|c| c.is_empty() || c.contains('_')) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::COLORS.to_string(),
                value: color.clone(),
                message: "颜色不能为空且不能包含下划线".to_string(),
            });
        }

        Ok(())
    }
}
