//! Line Commands

/// 创建线路命令
#[derive(Debug, Clone)]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

/// 修改线路命令（仅名称和颜色）
#[derive(Debug, Clone)]
pub struct UpdateLine {
    pub line_id: i64,
    pub name: String,
    pub color: String,
}

/// 删除线路命令
#[derive(Debug, Clone)]
pub struct DeleteLine {
    pub line_id: i64,
}
