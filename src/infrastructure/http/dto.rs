//! Data Transfer Objects
//!
//! JSON 字段使用 camelCase

use serde::{Deserialize, Serialize};

use crate::application::{LineView, StationView};

// ============================================================================
// Station DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
}

impl From<StationView> for StationResponse {
    fn from(view: StationView) -> Self {
        Self {
            id: view.id,
            name: view.name,
        }
    }
}

// ============================================================================
// Line DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCreateRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub distance: i64,
    /// 上行站在前，下行站在后
    pub stations: Vec<StationResponse>,
}

impl From<LineView> for LineResponse {
    fn from(view: LineView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            color: view.color,
            distance: view.distance,
            stations: view.stations.into_iter().map(StationResponse::from).collect(),
        }
    }
}
