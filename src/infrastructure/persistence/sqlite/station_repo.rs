//! SQLite Station Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{RepositoryError, StationRecord, StationRepositoryPort};

/// SQLite Station Repository
pub struct SqliteStationRepository {
    pool: DbPool,
}

impl SqliteStationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StationRow {
    id: i64,
    name: String,
    created_at: String,
}

impl TryFrom<StationRow> for StationRecord {
    type Error = RepositoryError;

    fn try_from(row: StationRow) -> Result<Self, Self::Error> {
        Ok(StationRecord {
            id: row.id,
            name: row.name,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl StationRepositoryPort for SqliteStationRepository {
    async fn create(&self, name: &str) -> Result<StationRecord, RepositoryError> {
        let created_at = Utc::now();

        let id = sqlx::query("INSERT INTO stations (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

        Ok(StationRecord {
            id,
            name: name.to_string(),
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StationRecord>, RepositoryError> {
        let row: Option<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        row.map(StationRecord::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<StationRecord>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // 构建 IN 子句的占位符
        let placeholders: Vec<&str> = ids.iter().map(|_| "?").collect();
        let query = format!(
            "SELECT id, name, created_at FROM stations WHERE id IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, StationRow>(&query);
        for id in ids {
            sql_query = sql_query.bind(*id);
        }

        let rows: Vec<StationRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(StationRecord::try_from).collect()
    }

    async fn find_all(&self) -> Result<Vec<StationRecord>, RepositoryError> {
        let rows: Vec<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        rows.into_iter().map(StationRecord::try_from).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM stations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
