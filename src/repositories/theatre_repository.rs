// src/repositories/theatre_repository.rs
//
// Theatre persistence. Tickets have no repository of their own; they are
// written and read through their owning theatre.

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Theatre, Ticket};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait TheatreRepository: Send + Sync {
    /// Insert every theatre and its tickets in one transaction;
    /// returns the assigned theatre ids in order
    fn add_batch(&self, theatres: &[Theatre]) -> AppResult<Vec<i64>>;
    fn list_all(&self) -> AppResult<Vec<Theatre>>;
    fn count(&self) -> AppResult<i64>;
}

pub struct SqliteTheatreRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTheatreRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_theatre(row: &Row) -> rusqlite::Result<Theatre> {
        Ok(Theatre {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            number_of_halls: row.get("number_of_halls")?,
            director: row.get("director")?,
            tickets: Vec::new(),
        })
    }

    fn row_to_ticket(row: &Row) -> rusqlite::Result<Ticket> {
        Ok(Ticket {
            id: Some(row.get("id")?),
            price: row.get("price")?,
            row_number: row.get("row_number")?,
            play_id: row.get("play_id")?,
        })
    }
}

impl TheatreRepository for SqliteTheatreRepository {
    fn add_batch(&self, theatres: &[Theatre]) -> AppResult<Vec<i64>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut ids = Vec::with_capacity(theatres.len());
        {
            let mut theatre_stmt = tx.prepare(
                "INSERT INTO theatres (name, number_of_halls, director) VALUES (?1, ?2, ?3)",
            )?;
            let mut ticket_stmt = tx.prepare(
                "INSERT INTO tickets (price, row_number, play_id, theatre_id)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for theatre in theatres {
                let theatre_id = theatre_stmt.insert(params![
                    theatre.name,
                    theatre.number_of_halls,
                    theatre.director,
                ])?;

                for ticket in &theatre.tickets {
                    ticket_stmt.execute(params![
                        ticket.price,
                        ticket.row_number,
                        ticket.play_id,
                        theatre_id,
                    ])?;
                }

                ids.push(theatre_id);
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    fn list_all(&self) -> AppResult<Vec<Theatre>> {
        let conn = self.pool.get()?;

        let mut theatre_stmt = conn.prepare(
            "SELECT id, name, number_of_halls, director FROM theatres ORDER BY id",
        )?;
        let mut theatres: Vec<Theatre> = theatre_stmt
            .query_map([], Self::row_to_theatre)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut ticket_stmt = conn.prepare(
            "SELECT id, price, row_number, play_id FROM tickets WHERE theatre_id = ?1 ORDER BY id",
        )?;
        for theatre in &mut theatres {
            theatre.tickets = ticket_stmt
                .query_map(params![theatre.id], Self::row_to_ticket)?
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(theatres)
    }

    fn count(&self) -> AppResult<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM theatres", [], |row| row.get(0))?;
        Ok(count)
    }
}
