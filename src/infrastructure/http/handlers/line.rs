//! Line HTTP Handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateLine, DeleteLine, GetLine, ListLines, UpdateLine};
use crate::infrastructure::http::dto::{LineCreateRequest, LineResponse, LineUpdateRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath};
use crate::infrastructure::http::state::AppState;

/// 创建线路，返回 201 + Location，响应体含上下行站信息
pub async fn create_line(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LineCreateRequest>,
) -> Result<Response, ApiError> {
    let command = CreateLine {
        name: req.name,
        color: req.color,
        up_station_id: req.up_station_id,
        down_station_id: req.down_station_id,
        distance: req.distance,
    };

    let line = state.create_line_handler.handle(command).await?;

    let location = format!("/lines/{}", line.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from(line)),
    )
        .into_response())
}

/// 获取线路列表
pub async fn list_lines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LineResponse>>, ApiError> {
    let lines = state.list_lines_handler.handle(ListLines).await?;
    Ok(Json(lines.into_iter().map(LineResponse::from).collect()))
}

/// 获取线路详情
pub async fn get_line(
    State(state): State<Arc<AppState>>,
    ApiPath(line_id): ApiPath<i64>,
) -> Result<Json<LineResponse>, ApiError> {
    let line = state.get_line_handler.handle(GetLine { line_id }).await?;
    Ok(Json(LineResponse::from(line)))
}

/// 修改线路名称、颜色
pub async fn update_line(
    State(state): State<Arc<AppState>>,
    ApiPath(line_id): ApiPath<i64>,
    ApiJson(req): ApiJson<LineUpdateRequest>,
) -> Result<StatusCode, ApiError> {
    let command = UpdateLine {
        line_id,
        name: req.name,
        color: req.color,
    };

    state.update_line_handler.handle(command).await?;

    Ok(StatusCode::OK)
}

/// 删除线路
pub async fn delete_line(
    State(state): State<Arc<AppState>>,
    ApiPath(line_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_line_handler
        .handle(DeleteLine { line_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
