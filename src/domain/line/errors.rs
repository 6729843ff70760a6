//! Line Context - Errors

use thiserror::Error;

use super::LineId;

#[derive(Debug, Error)]
pub enum LineError {
    #[error("线路不存在: {0}")]
    NotFound(LineId),

    #[error("线路名称已存在: {0}")]
    DuplicateName(String),

    #[error("无效的线路名称: {0}")]
    InvalidName(String),

    #[error("无效的线路颜色: {0}")]
    InvalidColor(String),

    #[error("无效的区间距离: {0}")]
    InvalidDistance(i64),

    #[error("上行站与下行站不能相同: {0}")]
    SameEndpoints(i64),
}
