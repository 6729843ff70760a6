//! Line Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Distance, LineColor, LineEndpoints, LineId, LineName};

/// Line 聚合根
///
/// 不变量:
/// - 端点与距离在创建后不可修改
/// - 仅名称与颜色可通过 `update_metadata` 修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    id: LineId,
    name: LineName,
    color: LineColor,
    endpoints: LineEndpoints,
    distance: Distance,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    /// 从持久化状态重建
    pub fn restore(
        id: LineId,
        name: LineName,
        color: LineColor,
        endpoints: LineEndpoints,
        distance: Distance,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            endpoints,
            distance,
            created_at,
            updated_at,
        }
    }

    /// 修改名称和颜色
    pub fn update_metadata(&mut self, name: LineName, color: LineColor) {
        self.name = name;
        self.color = color;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn color(&self) -> &LineColor {
        &self.color
    }

    pub fn endpoints(&self) -> LineEndpoints {
        self.endpoints
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
