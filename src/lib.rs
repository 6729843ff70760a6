//! Subway - 地铁车站与线路管理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Station Context: 车站
//! - Line Context: 线路（两个端点车站 + 区间距离）
//!
//! 应用层 (application/):
//! - Ports: StationRepository, LineRepository
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储、数据库清理器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
