//! Line Query Handlers
//!
//! 线路查询会把上下行站 ID 解析为车站信息

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{LineRecord, LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::{GetLine, ListLines};

use super::StationView;

// ============================================================================
// Response DTOs
// ============================================================================

/// 线路视图（含上下行站信息）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub distance: i64,
    /// 按上行、下行顺序排列
    pub stations: Vec<StationView>,
}

impl LineView {
    /// 用已解析的车站表组装视图
    ///
    /// 端点缺失说明数据不一致（车站删除受线路引用保护）
    pub(crate) fn assemble(
        record: LineRecord,
        stations: &HashMap<i64, StationView>,
    ) -> Result<Self, ApplicationError> {
        let endpoint = |station_id: i64| {
            stations.get(&station_id).cloned().ok_or_else(|| {
                ApplicationError::internal(format!(
                    "line {} references missing station {}",
                    record.id, station_id
                ))
            })
        };
        let up = endpoint(record.up_station_id)?;
        let down = endpoint(record.down_station_id)?;

        Ok(Self {
            id: record.id,
            name: record.name,
            color: record.color,
            distance: record.distance,
            stations: vec![up, down],
        })
    }
}

/// 批量加载线路引用的车站
async fn load_endpoint_stations(
    station_repo: &dyn StationRepositoryPort,
    lines: &[LineRecord],
) -> Result<HashMap<i64, StationView>, ApplicationError> {
    let mut ids: Vec<i64> = lines
        .iter()
        .flat_map(|line| [line.up_station_id, line.down_station_id])
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let stations = station_repo.find_by_ids(&ids).await?;
    Ok(stations
        .into_iter()
        .map(|s| (s.id, StationView::from(s)))
        .collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// GetLine Handler
pub struct GetLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl GetLineHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, query: GetLine) -> Result<LineView, ApplicationError> {
        let line = self
            .line_repo
            .find_by_id(query.line_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", query.line_id))?;

        let stations =
            load_endpoint_stations(self.station_repo.as_ref(), std::slice::from_ref(&line)).await?;
        LineView::assemble(line, &stations)
    }
}

/// ListLines Handler
pub struct ListLinesHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl ListLinesHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, _query: ListLines) -> Result<Vec<LineView>, ApplicationError> {
        let lines = self.line_repo.find_all().await?;
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let stations = load_endpoint_stations(self.station_repo.as_ref(), &lines).await?;
        lines
            .into_iter()
            .map(|line| LineView::assemble(line, &stations))
            .collect()
    }
}
