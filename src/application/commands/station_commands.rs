//! Station Commands

/// 创建车站命令
#[derive(Debug, Clone)]
pub struct CreateStation {
    pub name: String,
}

/// 删除车站命令
#[derive(Debug, Clone)]
pub struct DeleteStation {
    pub station_id: i64,
}
