//! 线路相关功能验收测试

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use subway::infrastructure::http::dto::LineUpdateRequest;

/// When 创建线路
/// Then 线路列表中可以找到该线路
#[tokio::test]
async fn create_line() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;

    let created = app.create_line(&request).await;

    let lines = app.list_lines().await;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, created.id);
    assert_eq!(
        created.stations.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![request.up_station_id, request.down_station_id]
    );
}

/// Given 创建两条线路
/// When 查询线路列表
/// Then 返回两条线路
#[tokio::test]
async fn list_lines() {
    let app = TestApp::spawn().await;
    let first = app.line_request("신분당선", "강남역", "양재역").await;
    let mut second = app.line_request("2호선", "사당역", "방배역").await;
    second.color = "bg-green-600".to_string();
    app.create_line(&first).await;
    app.create_line(&second).await;

    let lines = app.list_lines().await;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].name, "2호선");
    assert_eq!(lines[1].stations[0].name, "사당역");
    assert_eq!(lines[1].stations[1].name, "방배역");
}

/// Given 创建线路
/// When 查询该线路
/// Then 返回线路信息及上下行站
#[tokio::test]
async fn get_line() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    let line_id = app.create_line(&request).await.id;

    let line = app.get_line(line_id).await;

    assert_eq!(line.name, request.name);
    assert_eq!(line.color, request.color);
    assert_eq!(
        line.stations.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![request.up_station_id, request.down_station_id]
    );
    assert_eq!(
        line.stations.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["강남역", "양재역"]
    );
}

/// Given 创建线路
/// When 修改该线路
/// Then 名称、颜色被修改，端点与距离不变
#[tokio::test]
async fn update_line() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    let line_id = app.create_line(&request).await.id;

    let update = LineUpdateRequest {
        name: "다른분당선".to_string(),
        color: "bg-black-600".to_string(),
    };
    assert_eq!(app.update_line(line_id, &update).await, StatusCode::OK);

    let updated = app.get_line(line_id).await;
    assert_eq!(updated.name, update.name);
    assert_eq!(updated.color, update.color);
    assert_eq!(updated.distance, request.distance);
    assert_eq!(
        updated.stations.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![request.up_station_id, request.down_station_id]
    );
}

/// Given 创建线路
/// When 删除该线路
/// Then 线路列表中找不到该线路
#[tokio::test]
async fn delete_line() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    let line_id = app.create_line(&request).await.id;

    assert_eq!(app.delete_line(line_id).await, StatusCode::NO_CONTENT);

    let ids: Vec<i64> = app.list_lines().await.into_iter().map(|l| l.id).collect();
    assert!(!ids.contains(&line_id));
    assert_eq!(app.list_stations().await.len(), 2);
}

#[tokio::test]
async fn update_line_with_blank_fields_is_rejected() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    let line_id = app.create_line(&request).await.id;

    for (name, color) in [("  ", "bg-black-600"), ("다른분당선", "")] {
        let update = LineUpdateRequest {
            name: name.to_string(),
            color: color.to_string(),
        };
        assert_eq!(app.update_line(line_id, &update).await, StatusCode::BAD_REQUEST);
    }

    let line = app.get_line(line_id).await;
    assert_eq!(line.name, request.name);
    assert_eq!(line.color, request.color);
}

#[tokio::test]
async fn unknown_line_is_not_found() {
    let app = TestApp::spawn().await;
    let update = LineUpdateRequest {
        name: "신분당선".to_string(),
        color: "bg-red-600".to_string(),
    };

    assert_eq!(app.get_line_status(1).await, StatusCode::NOT_FOUND);
    assert_eq!(app.update_line(1, &update).await, StatusCode::NOT_FOUND);
    assert_eq!(app.delete_line(1).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_line_payloads_are_rejected() {
    let app = TestApp::spawn().await;
    let up = app.create_station("강남역").await.id;
    let down = app.create_station("양재역").await.id;

    let same_endpoints = json!({
        "name": "신분당선", "color": "bg-red-600",
        "upStationId": up, "downStationId": up, "distance": 10
    });
    let zero_distance = json!({
        "name": "신분당선", "color": "bg-red-600",
        "upStationId": up, "downStationId": down, "distance": 0
    });
    let missing_color = json!({
        "name": "신분당선",
        "upStationId": up, "downStationId": down, "distance": 10
    });
    for body in [same_endpoints, zero_distance, missing_color] {
        assert_eq!(app.try_create_line(body).await, StatusCode::BAD_REQUEST);
    }

    let unknown_station = json!({
        "name": "신분당선", "color": "bg-red-600",
        "upStationId": up, "downStationId": 999, "distance": 10
    });
    assert_eq!(app.try_create_line(unknown_station).await, StatusCode::NOT_FOUND);

    assert!(app.list_lines().await.is_empty());
}

#[tokio::test]
async fn duplicate_line_name_conflicts() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    app.create_line(&request).await;

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(app.try_create_line(body).await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn station_in_use_cannot_be_deleted() {
    let app = TestApp::spawn().await;
    let request = app.line_request("신분당선", "강남역", "양재역").await;
    let line_id = app.create_line(&request).await.id;

    assert_eq!(
        app.delete_station(request.up_station_id).await,
        StatusCode::CONFLICT
    );

    app.delete_line(line_id).await;
    assert_eq!(
        app.delete_station(request.up_station_id).await,
        StatusCode::NO_CONTENT
    );
}
