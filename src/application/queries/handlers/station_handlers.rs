//! Station Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{StationRecord, StationRepositoryPort};
use crate::application::queries::ListStations;
use crate::domain::station::Station;

// ============================================================================
// Response DTOs
// ============================================================================

/// 车站视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationView {
    pub id: i64,
    pub name: String,
}

impl From<StationRecord> for StationView {
    fn from(record: StationRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<&Station> for StationView {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().as_i64(),
            name: station.name().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListStations Handler
pub struct ListStationsHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl ListStationsHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, _query: ListStations) -> Result<Vec<StationView>, ApplicationError> {
        let stations = self.station_repo.find_all().await?;
        Ok(stations.into_iter().map(StationView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{test_pool, SqliteStationRepository};

    #[tokio::test]
    async fn test_list_stations_in_creation_order() {
        let repo = Arc::new(SqliteStationRepository::new(test_pool().await));
        repo.create("강남역").await.unwrap();
        repo.create("역삼역").await.unwrap();

        let handler = ListStationsHandler::new(repo);
        let names: Vec<String> = handler
            .handle(ListStations)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["강남역", "역삼역"]);
    }
}
