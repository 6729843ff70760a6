//! Station Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStation, DeleteStation};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::handlers::StationView;
use crate::domain::station::{Station, StationError, StationId, StationName};

// ============================================================================
// CreateStation
// ============================================================================

/// CreateStation Handler
pub struct CreateStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl CreateStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, command: CreateStation) -> Result<StationView, ApplicationError> {
        let name = StationName::new(command.name)?;

        let record = self.station_repo.create(name.as_str()).await?;
        let station = Station::new(StationId::new(record.id), name);

        tracing::info!(
            station_id = %station.id(),
            name = %station.name(),
            "Station created"
        );

        Ok(StationView::from(&station))
    }
}

// ============================================================================
// DeleteStation
// ============================================================================

/// DeleteStation Handler
///
/// 仍被线路引用的车站不可删除
pub struct DeleteStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl DeleteStationHandler {
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            station_repo,
            line_repo,
        }
    }

    pub async fn handle(&self, command: DeleteStation) -> Result<(), ApplicationError> {
        let station_id = StationId::new(command.station_id);

        let station = self
            .station_repo
            .find_by_id(station_id.as_i64())
            .await?
            .ok_or(StationError::NotFound(station_id))?;

        if self.line_repo.exists_by_station(station_id.as_i64()).await? {
            return Err(StationError::InUse(station_id).into());
        }

        if !self.station_repo.delete(station_id.as_i64()).await? {
            return Err(StationError::NotFound(station_id).into());
        }

        tracing::info!(
            station_id = %station_id,
            name = %station.name,
            "Station deleted"
        );

        Ok(())
    }
}
