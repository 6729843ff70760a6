//! Station Context - Errors

use thiserror::Error;

use super::StationId;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("车站不存在: {0}")]
    NotFound(StationId),

    #[error("无效的车站名称: {0}")]
    InvalidName(String),

    #[error("车站仍被线路引用: {0}")]
    InUse(StationId),
}
