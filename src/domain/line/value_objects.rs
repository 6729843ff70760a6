//! Line Context - Value Objects

use serde::{Deserialize, Serialize};

use super::LineError;
use crate::domain::station::StationId;

const MAX_NAME_CHARS: usize = 100;
const MAX_COLOR_CHARS: usize = 50;

/// 线路唯一标识（由数据库自增生成）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(i64);

impl LineId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for LineId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineName(String);

impl LineName {
    pub fn new(name: impl Into<String>) -> Result<Self, LineError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LineError::InvalidName("线路名称不能为空".to_string()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(LineError::InvalidName(format!(
                "线路名称长度不能超过{}字符",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路颜色（前端样式标签，如 `bg-red-600`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor(String);

impl LineColor {
    pub fn new(color: impl Into<String>) -> Result<Self, LineError> {
        let color = color.into().trim().to_string();
        if color.is_empty() {
            return Err(LineError::InvalidColor("线路颜色不能为空".to_string()));
        }
        if color.chars().count() > MAX_COLOR_CHARS {
            return Err(LineError::InvalidColor(format!(
                "线路颜色长度不能超过{}字符",
                MAX_COLOR_CHARS
            )));
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 区间距离，必须为正数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance(i64);

impl Distance {
    pub fn new(distance: i64) -> Result<Self, LineError> {
        if distance <= 0 {
            return Err(LineError::InvalidDistance(distance));
        }
        Ok(Self(distance))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 线路端点（上行站、下行站）
///
/// 不变量: 上行站与下行站不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEndpoints {
    up: StationId,
    down: StationId,
}

impl LineEndpoints {
    pub fn new(up: StationId, down: StationId) -> Result<Self, LineError> {
        if up == down {
            return Err(LineError::SameEndpoints(up.as_i64()));
        }
        Ok(Self { up, down })
    }

    pub fn up(&self) -> StationId {
        self.up
    }

    pub fn down(&self) -> StationId {
        self.down
    }

    /// 按上行、下行顺序返回
    pub fn as_array(&self) -> [StationId; 2] {
        [self.up, self.down]
    }
}
