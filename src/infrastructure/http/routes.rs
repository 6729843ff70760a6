//! HTTP Routes
//!
//! API Endpoints:
//! - /ping             GET     健康检查
//! - /stations         POST    创建车站
//! - /stations         GET     列出所有车站
//! - /stations/:id     DELETE  删除车站
//! - /lines            POST    创建线路
//! - /lines            GET     列出所有线路
//! - /lines/:id        GET     获取线路详情
//! - /lines/:id        PUT     修改线路名称、颜色
//! - /lines/:id        DELETE  删除线路

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(station_routes())
        .merge(line_routes())
}

/// Station 路由
fn station_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stations",
            get(handlers::list_stations).post(handlers::create_station),
        )
        .route("/stations/:station_id", delete(handlers::delete_station))
}

/// Line 路由
fn line_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/lines",
            get(handlers::list_lines).post(handlers::create_line),
        )
        .route(
            "/lines/:line_id",
            get(handlers::get_line)
                .put(handlers::update_line)
                .delete(handlers::delete_line),
        )
}
