//! SQLite Database - 数据库连接、迁移与清理

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 每个连接都启用 WAL、busy_timeout=5000ms 和外键约束
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.is_in_memory() {
        // 内存库随最后一个连接关闭而消失
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 stations 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 lines 表，端点车站不可在被引用时删除
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL,
            up_station_id INTEGER NOT NULL,
            down_station_id INTEGER NOT NULL,
            distance INTEGER NOT NULL CHECK (distance > 0),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (up_station_id) REFERENCES stations(id) ON DELETE RESTRICT,
            FOREIGN KEY (down_station_id) REFERENCES stations(id) ON DELETE RESTRICT,
            CHECK (up_station_id <> down_station_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lines_up_station_id
        ON lines(up_station_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_lines_down_station_id
        ON lines(down_station_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 数据库清理器
///
/// 清空所有业务表并重置自增序列，用于验收测试前重置状态
#[derive(Clone)]
pub struct DatabaseCleaner {
    pool: DbPool,
}

impl DatabaseCleaner {
    /// 按外键依赖顺序排列（先子表后父表）
    const TABLES: &'static [&'static str] = &["lines", "stations"];

    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 在单个事务中清空所有表
    pub async fn execute(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        for table in Self::TABLES {
            sqlx::query(&format!("DELETE FROM {}", table))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

            sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
                .bind(*table)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        tracing::debug!(tables = ?Self::TABLES, "Database cleaned");
        Ok(())
    }
}

/// sqlx 错误转换为仓储错误
///
/// 唯一约束 -> Duplicate，外键/CHECK 约束 -> ConstraintViolation
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(db_err.message().to_string())
        }
        sqlx::Error::Database(db_err)
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() =>
        {
            RepositoryError::ConstraintViolation(db_err.message().to_string())
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}

/// 测试用内存数据库（已完成迁移）
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let pool = test_pool().await;

        let result = sqlx::query(
            "INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at) \
             VALUES ('x', 'bg', 1, 2, 10, '', '')",
        )
        .execute(&pool)
        .await;

        let err = map_sqlx_error(result.unwrap_err());
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_cleaner_empties_tables_and_resets_ids() {
        let pool = test_pool().await;
        for name in ["강남역", "양재역"] {
            sqlx::query("INSERT INTO stations (name, created_at) VALUES (?, '')")
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }
        sqlx::query(
            "INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at) \
             VALUES ('신분당선', 'bg-red-600', 1, 2, 10, '', '')",
        )
        .execute(&pool)
        .await
        .unwrap();

        DatabaseCleaner::new(pool.clone()).execute().await.unwrap();

        let (stations,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stations")
            .fetch_one(&pool)
            .await
            .unwrap();
        let (lines,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lines")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((stations, lines), (0, 0));

        let id = sqlx::query("INSERT INTO stations (name, created_at) VALUES ('역삼역', '')")
            .execute(&pool)
            .await
            .unwrap()
            .last_insert_rowid();
        assert_eq!(id, 1);
    }
}
