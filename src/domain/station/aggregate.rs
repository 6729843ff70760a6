//! Station Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{StationId, StationName};

/// Station 聚合根
///
/// 车站一经创建不可修改，只能删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: StationName,
}

impl Station {
    pub fn new(id: StationId, name: StationName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }
}
