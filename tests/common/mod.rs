//! 验收测试公共设施
//!
//! 每个测试启动一个绑定随机端口的真实服务器，通过 HTTP 调用接口

#![allow(dead_code)]

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use tokio::net::TcpListener;

use subway::infrastructure::http::dto::{
    LineCreateRequest, LineResponse, LineUpdateRequest, StationRequest, StationResponse,
};
use subway::infrastructure::http::{AppState, HttpServer, ServerConfig};
use subway::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLineRepository, SqliteStationRepository,
};
use subway::infrastructure::DatabaseCleaner;

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub cleaner: DatabaseCleaner,
}

impl TestApp {
    /// 启动服务器并清空数据库
    pub async fn spawn() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            Arc::new(SqliteStationRepository::new(pool.clone())),
            Arc::new(SqliteLineRepository::new(pool.clone())),
        );
        let server = HttpServer::new(ServerConfig::new("127.0.0.1", 0), state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(server.serve(listener, std::future::pending()));

        let app = Self {
            base_url: format!("http://{}", addr),
            client: Client::new(),
            cleaner: DatabaseCleaner::new(pool),
        };
        app.cleaner.execute().await.unwrap();
        app
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Station fixtures
    // ========================================================================

    pub async fn create_station(&self, name: &str) -> StationResponse {
        let response = self
            .client
            .post(self.url("/stations"))
            .json(&StationRequest {
                name: name.to_string(),
            })
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    pub async fn list_stations(&self) -> Vec<StationResponse> {
        let response = self.client.get(self.url("/stations")).send().await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    pub async fn delete_station(&self, station_id: i64) -> StatusCode {
        self.client
            .delete(self.url(&format!("/stations/{}", station_id)))
            .send()
            .await
            .unwrap()
            .status()
    }

    // ========================================================================
    // Line fixtures
    // ========================================================================

    pub async fn create_line(&self, request: &LineCreateRequest) -> LineResponse {
        let response = self
            .client
            .post(self.url("/lines"))
            .json(request)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }

    pub async fn try_create_line(&self, body: serde_json::Value) -> StatusCode {
        self.client
            .post(self.url("/lines"))
            .json(&body)
            .send()
            .await
            .unwrap()
            .status()
    }

    pub async fn list_lines(&self) -> Vec<LineResponse> {
        let response = self.client.get(self.url("/lines")).send().await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    pub async fn get_line(&self, line_id: i64) -> LineResponse {
        let response = self
            .client
            .get(self.url(&format!("/lines/{}", line_id)))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    pub async fn get_line_status(&self, line_id: i64) -> StatusCode {
        self.client
            .get(self.url(&format!("/lines/{}", line_id)))
            .send()
            .await
            .unwrap()
            .status()
    }

    pub async fn update_line(&self, line_id: i64, request: &LineUpdateRequest) -> StatusCode {
        self.client
            .put(self.url(&format!("/lines/{}", line_id)))
            .json(request)
            .send()
            .await
            .unwrap()
            .status()
    }

    pub async fn delete_line(&self, line_id: i64) -> StatusCode {
        self.client
            .delete(self.url(&format!("/lines/{}", line_id)))
            .send()
            .await
            .unwrap()
            .status()
    }

    /// 新建两个车站并返回以其为端点的线路请求
    pub async fn line_request(&self, name: &str, up: &str, down: &str) -> LineCreateRequest {
        LineCreateRequest {
            name: name.to_string(),
            color: "bg-red-600".to_string(),
            up_station_id: self.create_station(up).await.id,
            down_station_id: self.create_station(down).await.id,
            distance: 10,
        }
    }
}
