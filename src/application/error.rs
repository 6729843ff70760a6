//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::line::LineError;
use crate::domain::station::StationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 资源冲突（重名、仍被引用等）
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) | RepositoryError::ConstraintViolation(msg) => {
                Self::Conflict(msg)
            }
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<StationError> for ApplicationError {
    fn from(err: StationError) -> Self {
        match err {
            StationError::NotFound(id) => Self::not_found("Station", id.as_i64()),
            StationError::InvalidName(_) => Self::ValidationError(err.to_string()),
            StationError::InUse(_) => Self::Conflict(err.to_string()),
        }
    }
}

impl From<LineError> for ApplicationError {
    fn from(err: LineError) -> Self {
        match err {
            LineError::NotFound(id) => Self::not_found("Line", id.as_i64()),
            LineError::DuplicateName(_) => Self::Conflict(err.to_string()),
            LineError::InvalidName(_)
            | LineError::InvalidColor(_)
            | LineError::InvalidDistance(_)
            | LineError::SameEndpoints(_) => Self::ValidationError(err.to_string()),
        }
    }
}
