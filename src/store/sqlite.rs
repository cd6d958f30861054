use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

use crate::app::{Result, RiaError};
use crate::domain::{LikedProduct, Moodboard, SavedProduct};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        migrations.to_latest(&mut conn)?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            RiaError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
    }

    fn moodboard_from_row(row: &Row<'_>) -> rusqlite::Result<Moodboard> {
        Ok(Moodboard {
            id: row.get(0)?,
            title: row.get(1)?,
            accent_color: row.get(2)?,
            cover_image: row.get(3)?,
            description: row.get(4)?,
            products: Vec::new(),
            created_at: row
                .get::<_, String>(5)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
            updated_at: row
                .get::<_, String>(6)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
        })
    }

    fn liked_from_row(row: &Row<'_>) -> rusqlite::Result<LikedProduct> {
        Ok(LikedProduct {
            id: row.get(0)?,
            title: row.get(1)?,
            image: row.get(2)?,
            description: row.get(3)?,
            extract: row.get(4)?,
            thumbnail: row.get(5)?,
            liked_at: row
                .get::<_, String>(6)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
        })
    }

    fn load_products(conn: &Connection, moodboard_id: &str) -> Result<Vec<SavedProduct>> {
        let mut stmt = conn.prepare(
            "SELECT product_id, title, image FROM moodboard_products
             WHERE moodboard_id = ?1 ORDER BY rowid",
        )?;

        let products = stmt
            .query_map(params![moodboard_id], |row| {
                Ok(SavedProduct {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    image: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(products)
    }

    fn ensure_moodboard(conn: &Connection, id: &str) -> Result<()> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM moodboards WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        if count == 0 {
            return Err(RiaError::MoodboardNotFound(id.to_string()));
        }
        Ok(())
    }
}

impl Store for SqliteStore {
    fn create_moodboard(&self, title: &str, accent_color: Option<&str>) -> Result<String> {
        let conn = self.lock()?;
        let board = Moodboard::new(title, accent_color.map(String::from));

        conn.execute(
            "INSERT INTO moodboards (id, title, accent_color, cover_image, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                board.id,
                board.title,
                board.accent_color,
                board.cover_image,
                board.description,
                board.created_at.to_rfc3339(),
                board.updated_at.to_rfc3339()
            ],
        )?;

        Ok(board.id)
    }

    fn get_moodboard(&self, id: &str) -> Result<Option<Moodboard>> {
        let conn = self.lock()?;

        let board = conn
            .query_row(
                "SELECT id, title, accent_color, cover_image, description, created_at, updated_at
                 FROM moodboards WHERE id = ?1",
                params![id],
                Self::moodboard_from_row,
            )
            .optional()?;

        match board {
            Some(mut board) => {
                board.products = Self::load_products(&conn, &board.id)?;
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    fn get_all_moodboards(&self) -> Result<Vec<Moodboard>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, accent_color, cover_image, description, created_at, updated_at
             FROM moodboards ORDER BY rowid",
        )?;

        let mut boards = stmt
            .query_map([], Self::moodboard_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for board in &mut boards {
            board.products = Self::load_products(&conn, &board.id)?;
        }

        Ok(boards)
    }

    fn add_product_to_moodboard(&self, moodboard_id: &str, product: &SavedProduct) -> Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        Self::ensure_moodboard(&tx, moodboard_id)?;

        let (existing, cover): (i64, Option<String>) = tx.query_row(
            "SELECT (SELECT COUNT(*) FROM moodboard_products WHERE moodboard_id = ?1), cover_image
             FROM moodboards WHERE id = ?1",
            params![moodboard_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let now = Utc::now().to_rfc3339();
        let inserted = tx.execute(
            "INSERT OR IGNORE INTO moodboard_products (moodboard_id, product_id, title, image, added_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![moodboard_id, product.id, product.title, product.image, now],
        )?;

        if inserted == 0 {
            return Ok(false);
        }

        if existing == 0 || cover.is_none() {
            tx.execute(
                "UPDATE moodboards SET cover_image = ?1, updated_at = ?2 WHERE id = ?3",
                params![product.image, now, moodboard_id],
            )?;
        } else {
            tx.execute(
                "UPDATE moodboards SET updated_at = ?1 WHERE id = ?2",
                params![now, moodboard_id],
            )?;
        }

        tx.commit()?;
        Ok(true)
    }

    fn remove_product_from_moodboard(&self, moodboard_id: &str, product_id: &str) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        Self::ensure_moodboard(&tx, moodboard_id)?;

        tx.execute(
            "DELETE FROM moodboard_products WHERE moodboard_id = ?1 AND product_id = ?2",
            params![moodboard_id, product_id],
        )?;

        let first_image: Option<String> = tx
            .query_row(
                "SELECT image FROM moodboard_products WHERE moodboard_id = ?1 ORDER BY rowid LIMIT 1",
                params![moodboard_id],
                |row| row.get(0),
            )
            .optional()?;

        tx.execute(
            "UPDATE moodboards SET cover_image = ?1, updated_at = ?2 WHERE id = ?3",
            params![first_image, Utc::now().to_rfc3339(), moodboard_id],
        )?;

        tx.commit()?;
        Ok(())
    }

    fn delete_moodboard(&self, id: &str) -> Result<()> {
        let conn = self.lock()?;

        let deleted = conn.execute("DELETE FROM moodboards WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(RiaError::MoodboardNotFound(id.to_string()));
        }
        Ok(())
    }

    fn update_moodboard_title(&self, id: &str, title: &str) -> Result<()> {
        let conn = self.lock()?;

        let updated = conn.execute(
            "UPDATE moodboards SET title = ?1, updated_at = ?2 WHERE id = ?3",
            params![title, Utc::now().to_rfc3339(), id],
        )?;
        if updated == 0 {
            return Err(RiaError::MoodboardNotFound(id.to_string()));
        }
        Ok(())
    }

    fn update_moodboard_cover(&self, id: &str, cover_image: &str) -> Result<()> {
        let conn = self.lock()?;

        let updated = conn.execute(
            "UPDATE moodboards SET cover_image = ?1, updated_at = ?2 WHERE id = ?3",
            params![cover_image, Utc::now().to_rfc3339(), id],
        )?;
        if updated == 0 {
            return Err(RiaError::MoodboardNotFound(id.to_string()));
        }
        Ok(())
    }

    fn toggle_like(&self, product: &LikedProduct) -> Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let removed = tx.execute("DELETE FROM liked_products WHERE id = ?1", params![product.id])?;
        if removed == 0 {
            tx.execute(
                "INSERT INTO liked_products (id, title, image, description, extract, thumbnail, liked_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    product.id,
                    product.title,
                    product.image,
                    product.description,
                    product.extract,
                    product.thumbnail,
                    Utc::now().to_rfc3339()
                ],
            )?;
        }

        tx.commit()?;
        Ok(removed == 0)
    }

    fn is_liked(&self, product_id: &str) -> Result<bool> {
        let conn = self.lock()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM liked_products WHERE id = ?1",
            params![product_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn remove_like(&self, product_id: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM liked_products WHERE id = ?1", params![product_id])?;
        Ok(())
    }

    fn get_liked_products(&self) -> Result<Vec<LikedProduct>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, image, description, extract, thumbnail, liked_at
             FROM liked_products ORDER BY rowid",
        )?;

        let liked = stmt
            .query_map([], Self::liked_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(liked)
    }
}
