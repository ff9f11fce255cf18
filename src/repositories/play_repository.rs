// src/repositories/play_repository.rs
//
// Play persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use super::conversion_error;
use crate::db::ConnectionPool;
use crate::domain::play::{Genre, Play, PlayDuration};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait PlayRepository: Send + Sync {
    /// Insert every play in one transaction; returns the assigned ids in order
    fn add_batch(&self, plays: &[Play]) -> AppResult<Vec<i64>>;
    fn list_all(&self) -> AppResult<Vec<Play>>;
    fn count(&self) -> AppResult<i64>;
}

pub struct SqlitePlayRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePlayRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Play - returns rusqlite::Error for query_map compatibility
    fn row_to_play(row: &Row) -> rusqlite::Result<Play> {
        let duration_str: String = row.get("duration")?;
        let duration = duration_str.parse::<PlayDuration>().map_err(|e| {
            conversion_error(2, format!("Invalid duration '{}': {}", duration_str, e))
        })?;

        let genre_str: String = row.get("genre")?;
        let genre = genre_str
            .parse::<Genre>()
            .map_err(|e| conversion_error(4, e.to_string()))?;

        let rating: f64 = row.get("rating")?;

        Ok(Play {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            duration,
            rating: rating as f32,
            genre,
            description: row.get("description")?,
            screenwriter: row.get("screenwriter")?,
        })
    }
}

impl PlayRepository for SqlitePlayRepository {
    fn add_batch(&self, plays: &[Play]) -> AppResult<Vec<i64>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut ids = Vec::with_capacity(plays.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO plays (title, duration, rating, genre, description, screenwriter)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;

            for play in plays {
                let id = stmt.insert(params![
                    play.title,
                    play.duration.to_string(),
                    f64::from(play.rating),
                    play.genre.as_str(),
                    play.description,
                    play.screenwriter,
                ])?;
                ids.push(id);
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    fn list_all(&self) -> AppResult<Vec<Play>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, duration, rating, genre, description, screenwriter
             FROM plays
             ORDER BY id",
        )?;

        let plays: Vec<Play> = stmt
            .query_map([], Self::row_to_play)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(plays)
    }

    fn count(&self) -> AppResult<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM plays", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    fn play(title: &str, genre: Genre) -> Play {
        Play::new(
            title.to_string(),
            PlayDuration::from_hms(2, 30, 0),
            7.5,
            genre,
            "Description".to_string(),
            "Screenwriter".to_string(),
        )
    }

    #[test]
    fn test_add_batch_assigns_ids_in_order() {
        let repo = SqlitePlayRepository::new(Arc::new(create_memory_pool().unwrap()));

        let ids = repo
            .add_batch(&[play("Hamlet", Genre::Drama), play("Cats", Genre::Musical)])
            .unwrap();

        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_list_all_reads_back_typed_values() {
        let repo = SqlitePlayRepository::new(Arc::new(create_memory_pool().unwrap()));
        let original = play("Hamlet", Genre::Romance);
        repo.add_batch(std::slice::from_ref(&original)).unwrap();

        let plays = repo.list_all().unwrap();

        assert_eq!(plays.len(), 1);
        assert!(plays[0].id.is_some());
        assert_eq!(plays[0].title, original.title);
        assert_eq!(plays[0].duration, original.duration);
        assert_eq!(plays[0].rating, original.rating);
        assert_eq!(plays[0].genre, Genre::Romance);
    }

    #[test]
    fn test_empty_batch_commits_nothing() {
        let repo = SqlitePlayRepository::new(Arc::new(create_memory_pool().unwrap()));

        let ids = repo.add_batch(&[]).unwrap();

        assert!(ids.is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
