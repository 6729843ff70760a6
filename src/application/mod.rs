//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StationRepository、LineRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Station commands
    CreateStation,
    DeleteStation,
    // Line commands
    CreateLine,
    DeleteLine,
    UpdateLine,
    // Handlers
    handlers::{
        CreateLineHandler, CreateStationHandler, DeleteLineHandler, DeleteStationHandler,
        UpdateLineHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    LineRecord, LineRepositoryPort, NewLineRecord, RepositoryError, StationRecord,
    StationRepositoryPort,
};

pub use queries::{
    // Station queries
    ListStations,
    // Line queries
    GetLine,
    ListLines,
    // Handlers
    handlers::{GetLineHandler, LineView, ListLinesHandler, ListStationsHandler, StationView},
};
