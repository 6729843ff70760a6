//! Station HTTP Handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateStation, DeleteStation, ListStations};
use crate::infrastructure::http::dto::{StationRequest, StationResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath};
use crate::infrastructure::http::state::AppState;

/// 创建车站，返回 201 + Location
pub async fn create_station(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<StationRequest>,
) -> Result<Response, ApiError> {
    let station = state
        .create_station_handler
        .handle(CreateStation { name: req.name })
        .await?;

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from(station)),
    )
        .into_response())
}

/// 获取车站列表（按创建顺序）
pub async fn list_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state.list_stations_handler.handle(ListStations).await?;
    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

/// 删除车站
pub async fn delete_station(
    State(state): State<Arc<AppState>>,
    ApiPath(station_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_station_handler
        .handle(DeleteStation { station_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
