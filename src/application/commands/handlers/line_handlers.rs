//! Line Command Handlers

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::commands::{CreateLine, DeleteLine, UpdateLine};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    LineRecord, LineRepositoryPort, NewLineRecord, RepositoryError, StationRepositoryPort,
};
use crate::application::queries::handlers::{LineView, StationView};
use crate::domain::line::{Distance, Line, LineColor, LineEndpoints, LineError, LineId, LineName};
use crate::domain::station::{StationError, StationId};

/// 从持久化记录重建 Line 聚合
fn restore_line(record: &LineRecord) -> Result<Line, ApplicationError> {
    let endpoints = LineEndpoints::new(
        StationId::new(record.up_station_id),
        StationId::new(record.down_station_id),
    )?;
    Ok(Line::restore(
        LineId::new(record.id),
        LineName::new(record.name.as_str())?,
        LineColor::new(record.color.as_str())?,
        endpoints,
        Distance::new(record.distance)?,
        record.created_at,
        record.updated_at,
    ))
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id().as_i64(),
            name: line.name().as_str().to_string(),
            color: line.color().as_str().to_string(),
            up_station_id: line.endpoints().up().as_i64(),
            down_station_id: line.endpoints().down().as_i64(),
            distance: line.distance().as_i64(),
            created_at: line.created_at(),
            updated_at: line.updated_at(),
        }
    }
}

// ============================================================================
// CreateLine
// ============================================================================

/// CreateLine Handler
///
/// 校验顺序: 字段格式 -> 端点车站存在 -> 名称唯一
pub struct CreateLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl CreateLineHandler {
    pub fn new(
        line_repo: Arc<dyn LineRepositoryPort>,
        station_repo: Arc<dyn StationRepositoryPort>,
    ) -> Self {
        Self {
            line_repo,
            station_repo,
        }
    }

    pub async fn handle(&self, command: CreateLine) -> Result<LineView, ApplicationError> {
        let name = LineName::new(command.name)?;
        let color = LineColor::new(command.color)?;
        let distance = Distance::new(command.distance)?;
        let endpoints = LineEndpoints::new(
            StationId::new(command.up_station_id),
            StationId::new(command.down_station_id),
        )?;

        let mut stations = HashMap::with_capacity(2);
        for station_id in endpoints.as_array() {
            let station = self
                .station_repo
                .find_by_id(station_id.as_i64())
                .await?
                .ok_or(StationError::NotFound(station_id))?;
            stations.insert(station.id, StationView::from(station));
        }

        if self.line_repo.find_by_name(name.as_str()).await?.is_some() {
            return Err(LineError::DuplicateName(name.to_string()).into());
        }

        let new_line = NewLineRecord {
            name: name.as_str().to_string(),
            color: color.as_str().to_string(),
            up_station_id: endpoints.up().as_i64(),
            down_station_id: endpoints.down().as_i64(),
            distance: distance.as_i64(),
        };
        let record = match self.line_repo.create(&new_line).await {
            Ok(record) => record,
            // 端点车站在校验之后被删除
            Err(RepositoryError::ConstraintViolation(msg)) => {
                for station_id in endpoints.as_array() {
                    if self.station_repo.find_by_id(station_id.as_i64()).await?.is_none() {
                        return Err(StationError::NotFound(station_id).into());
                    }
                }
                return Err(RepositoryError::ConstraintViolation(msg).into());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            line_id = record.id,
            name = %record.name,
            up_station_id = record.up_station_id,
            down_station_id = record.down_station_id,
            distance = record.distance,
            "Line created"
        );

        LineView::assemble(record, &stations)
    }
}

// ============================================================================
// UpdateLine
// ============================================================================

/// UpdateLine Handler
pub struct UpdateLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl UpdateLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: UpdateLine) -> Result<(), ApplicationError> {
        let line_id = LineId::new(command.line_id);

        let record = self
            .line_repo
            .find_by_id(line_id.as_i64())
            .await?
            .ok_or(LineError::NotFound(line_id))?;

        let name = LineName::new(command.name)?;
        let color = LineColor::new(command.color)?;

        if let Some(other) = self.line_repo.find_by_name(name.as_str()).await? {
            if other.id != line_id.as_i64() {
                return Err(LineError::DuplicateName(name.to_string()).into());
            }
        }

        let mut line = restore_line(&record)?;
        line.update_metadata(name, color);

        if !self.line_repo.update(&LineRecord::from(&line)).await? {
            return Err(LineError::NotFound(line_id).into());
        }

        tracing::info!(
            line_id = %line_id,
            name = %line.name(),
            color = line.color().as_str(),
            "Line updated"
        );

        Ok(())
    }
}

// ============================================================================
// DeleteLine
// ============================================================================

/// DeleteLine Handler
///
/// 删除线路不会删除其端点车站
pub struct DeleteLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl DeleteLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: DeleteLine) -> Result<(), ApplicationError> {
        let line_id = LineId::new(command.line_id);

        if !self.line_repo.delete(line_id.as_i64()).await? {
            return Err(LineError::NotFound(line_id).into());
        }

        tracing::info!(line_id = %line_id, "Line deleted");

        Ok(())
    }
}
