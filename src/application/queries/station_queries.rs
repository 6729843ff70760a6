//! Station Queries

/// 列出所有车站查询
#[derive(Debug, Clone)]
pub struct ListStations;
