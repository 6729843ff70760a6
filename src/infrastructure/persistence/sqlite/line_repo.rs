//! SQLite Line Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{LineRecord, LineRepositoryPort, NewLineRecord, RepositoryError};

const SELECT_COLUMNS: &str =
    "SELECT id, name, color, up_station_id, down_station_id, distance, created_at, updated_at FROM lines";

/// SQLite Line Repository
pub struct SqliteLineRepository {
    pool: DbPool,
}

impl SqliteLineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LineRow {
    id: i64,
    name: String,
    color: String,
    up_station_id: i64,
    down_station_id: i64,
    distance: i64,
    created_at: String,
    updated_at: String,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<LineRow> for LineRecord {
    type Error = RepositoryError;

    fn try_from(row: LineRow) -> Result<Self, Self::Error> {
        Ok(LineRecord {
            id: row.id,
            name: row.name,
            color: row.color,
            up_station_id: row.up_station_id,
            down_station_id: row.down_station_id,
            distance: row.distance,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl LineRepositoryPort for SqliteLineRepository {
    async fn create(&self, line: &NewLineRecord) -> Result<LineRecord, RepositoryError> {
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO lines (name, color, up_station_id, down_station_id, distance, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&line.name)
        .bind(&line.color)
        .bind(line.up_station_id)
        .bind(line.down_station_id)
        .bind(line.distance)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .last_insert_rowid();

        Ok(LineRecord {
            id,
            name: line.name.clone(),
            color: line.color.clone(),
            up_station_id: line.up_station_id,
            down_station_id: line.down_station_id,
            distance: line.distance,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LineRecord>, RepositoryError> {
        let row: Option<LineRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(LineRecord::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LineRecord>, RepositoryError> {
        let row: Option<LineRow> = sqlx::query_as(&format!("{} WHERE name = ?", SELECT_COLUMNS))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(LineRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<LineRecord>, RepositoryError> {
        let rows: Vec<LineRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(LineRecord::try_from).collect()
    }

    async fn update(&self, line: &LineRecord) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE lines
            SET name = ?, color = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&line.name)
        .bind(&line.color)
        .bind(line.updated_at.to_rfc3339())
        .bind(line.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM lines WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_station(&self, station_id: i64) -> Result<bool, RepositoryError> {
        let (exists,): (i64,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM lines WHERE up_station_id = ? OR down_station_id = ?)",
        )
        .bind(station_id)
        .bind(station_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(exists != 0)
    }
}
