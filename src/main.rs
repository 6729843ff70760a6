//! Subway - 地铁车站与线路管理服务
//!
//! 启动流程: 配置 -> 日志 -> 数据库 -> Repository -> AppState -> HTTP 服务器

use std::sync::Arc;

use anyhow::Context;

use subway::config::{load_config, print_config, LogConfig};
use subway::infrastructure::http::{AppState, HttpServer, ServerConfig};
use subway::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLineRepository, SqliteStationRepository,
};

/// 初始化日志（`RUST_LOG` 优先于配置文件）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},subway={},tower_http=debug", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().context("Failed to load config")?;

    init_tracing(&config.log);

    tracing::info!("Subway - 地铁车站与线路管理服务");
    print_config(&config);

    // 确保数据目录存在
    if !config.database.is_in_memory() {
        let parent = std::path::Path::new(&config.database.path).parent();
        if let Some(dir) = parent.filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.effective_max_connections(),
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to open database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    // 创建 Repository 适配器
    let station_repo = Arc::new(SqliteStationRepository::new(pool.clone()));
    let line_repo = Arc::new(SqliteLineRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(station_repo, line_repo);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
