// src/repositories/cast_repository.rs
//
// Cast persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Cast;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait CastRepository: Send + Sync {
    /// Insert every cast member in one transaction; returns the assigned ids in order
    fn add_batch(&self, casts: &[Cast]) -> AppResult<Vec<i64>>;
    fn list_all(&self) -> AppResult<Vec<Cast>>;
    fn count(&self) -> AppResult<i64>;
}

pub struct SqliteCastRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCastRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_cast(row: &Row) -> rusqlite::Result<Cast> {
        Ok(Cast {
            id: Some(row.get("id")?),
            full_name: row.get("full_name")?,
            is_main_character: row.get("is_main_character")?,
            phone_number: row.get("phone_number")?,
            play_id: row.get("play_id")?,
        })
    }
}

impl CastRepository for SqliteCastRepository {
    fn add_batch(&self, casts: &[Cast]) -> AppResult<Vec<i64>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut ids = Vec::with_capacity(casts.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO casts (full_name, is_main_character, phone_number, play_id)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for cast in casts {
                ids.push(stmt.insert(params![
                    cast.full_name,
                    cast.is_main_character,
                    cast.phone_number,
                    cast.play_id,
                ])?);
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    fn list_all(&self) -> AppResult<Vec<Cast>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, full_name, is_main_character, phone_number, play_id
             FROM casts
             ORDER BY id",
        )?;

        let casts: Vec<Cast> = stmt
            .query_map([], Self::row_to_cast)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(casts)
    }

    fn count(&self) -> AppResult<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM casts", [], |row| row.get(0))?;
        Ok(count)
    }
}
