//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateLineHandler, CreateStationHandler, DeleteLineHandler, DeleteStationHandler,
    UpdateLineHandler,
    // Query handlers
    GetLineHandler, ListLinesHandler, ListStationsHandler,
    // Ports
    LineRepositoryPort, StationRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_station_handler: CreateStationHandler,
    pub delete_station_handler: DeleteStationHandler,
    pub create_line_handler: CreateLineHandler,
    pub update_line_handler: UpdateLineHandler,
    pub delete_line_handler: DeleteLineHandler,

    // ========== Query Handlers ==========
    pub list_stations_handler: ListStationsHandler,
    pub list_lines_handler: ListLinesHandler,
    pub get_line_handler: GetLineHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_station_handler: CreateStationHandler::new(station_repo.clone()),
            delete_station_handler: DeleteStationHandler::new(
                station_repo.clone(),
                line_repo.clone(),
            ),
            create_line_handler: CreateLineHandler::new(line_repo.clone(), station_repo.clone()),
            update_line_handler: UpdateLineHandler::new(line_repo.clone()),
            delete_line_handler: DeleteLineHandler::new(line_repo.clone()),

            // Query handlers
            list_stations_handler: ListStationsHandler::new(station_repo.clone()),
            list_lines_handler: ListLinesHandler::new(line_repo.clone(), station_repo.clone()),
            get_line_handler: GetLineHandler::new(line_repo, station_repo),
        }
    }
}
