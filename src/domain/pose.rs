// ==========================================
// ARIAC 评分引擎 - 六自由度位姿
// ==========================================
// 位置: 米; 姿态: 单位四元数 (x, y, z, w)
// 欧拉角约定: roll-pitch-yaw (绕 X-Y-Z 固定轴)
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vector3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// 由欧拉角构造
    pub fn from_rpy(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// 归一化; 零四元数退化为单位四元数
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n <= f64::EPSILON || !n.is_finite() {
            return Self::IDENTITY;
        }
        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// 转换为 (roll, pitch, yaw)
    pub fn to_rpy(&self) -> (f64, f64, f64) {
        let q = self.normalized();

        let roll = (2.0 * (q.w * q.x + q.y * q.z)).atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y));

        let sin_pitch = 2.0 * (q.w * q.y - q.z * q.x);
        let pitch = if sin_pitch.abs() >= 1.0 {
            std::f64::consts::FRAC_PI_2.copysign(sin_pitch)
        } else {
            sin_pitch.asin()
        };

        let yaw = (2.0 * (q.w * q.z + q.x * q.y)).atan2(1.0 - 2.0 * (q.y * q.y + q.z * q.z));

        (roll, pitch, yaw)
    }

    /// 两个姿态之间的旋转角 (弧度, [0, π])
    ///
    /// q 与 -q 表示同一旋转, 取点积绝对值
    pub fn angle_to(&self, other: &Quaternion) -> f64 {
        let dot = self.normalized().dot(&other.normalized()).abs().min(1.0);
        2.0 * dot.acos()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ==========================================
// Pose - 位姿
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3,
    #[serde(default)]
    pub orientation: Quaternion,
}

impl Pose {
    pub fn new(position: Vector3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn from_xyz_rpy(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Quaternion::from_rpy(roll, pitch, yaw))
    }

    pub fn rpy(&self) -> (f64, f64, f64) {
        self.orientation.to_rpy()
    }

    pub fn position_distance(&self, other: &Pose) -> f64 {
        self.position.distance(&other.position)
    }

    pub fn orientation_error(&self, other: &Pose) -> f64 {
        self.orientation.angle_to(&other.orientation)
    }
}
