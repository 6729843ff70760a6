//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Station Repository
// ============================================================================

/// 车站实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Station Repository Port
#[async_trait]
pub trait StationRepositoryPort: Send + Sync {
    /// 新建车站，返回带自增 ID 的记录
    async fn create(&self, name: &str) -> Result<StationRecord, RepositoryError>;

    /// 根据 ID 查找车站
    async fn find_by_id(&self, id: i64) -> Result<Option<StationRecord>, RepositoryError>;

    /// 批量查找车站（结果顺序不保证与 ids 一致）
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<StationRecord>, RepositoryError>;

    /// 按创建顺序获取所有车站
    async fn find_all(&self) -> Result<Vec<StationRecord>, RepositoryError>;

    /// 删除车站，返回是否有记录被删除
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Line Repository
// ============================================================================

/// 新建线路参数
#[derive(Debug, Clone)]
pub struct NewLineRecord {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

/// 线路实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line Repository Port
#[async_trait]
pub trait LineRepositoryPort: Send + Sync {
    /// 新建线路，返回带自增 ID 的记录
    async fn create(&self, line: &NewLineRecord) -> Result<LineRecord, RepositoryError>;

    /// 根据 ID 查找线路
    async fn find_by_id(&self, id: i64) -> Result<Option<LineRecord>, RepositoryError>;

    /// 根据名称查找线路
    async fn find_by_name(&self, name: &str) -> Result<Option<LineRecord>, RepositoryError>;

    /// 按创建顺序获取所有线路
    async fn find_all(&self) -> Result<Vec<LineRecord>, RepositoryError>;

    /// 更新线路名称、颜色（端点与距离不会被修改），返回是否有记录被更新
    async fn update(&self, line: &LineRecord) -> Result<bool, RepositoryError>;

    /// 删除线路，返回是否有记录被删除
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 是否存在引用该车站的线路
    async fn exists_by_station(&self, station_id: i64) -> Result<bool, RepositoryError>;
}
