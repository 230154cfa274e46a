//! Durable task storage over a single SQLite table.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use crate::models::Task;

/// Errors raised by the task store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened or its schema could not be
    /// created. This is a startup-fatal condition; callers must not keep
    /// running with a dead handle.
    #[error("storage unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// An I/O error occurred while preparing the database location.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database error occurred after the store was opened.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLite-backed task store. One connection, opened once per process.
#[derive(Debug)]
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    /// Safe to call on an existing database; the schema statement is
    /// `IF NOT EXISTS` and existing rows are untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS tasks (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                date TEXT NOT NULL
            );
            ",
        )
        .map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { conn })
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, task, date FROM tasks ORDER BY id ASC")?;
        let tasks = stmt.query_map([], Self::parse_task)?.flatten().collect();
        Ok(tasks)
    }

    /// Append a new task and return it with its assigned id. Text uniqueness
    /// is not enforced.
    pub fn insert(&self, text: &str, date: &str) -> Result<Task> {
        self.conn.execute(
            "INSERT INTO tasks (task, date) VALUES (?1, ?2)",
            params![text, date],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Task {
            id,
            text: text.to_string(),
            date: date.to_string(),
        })
    }

    /// Set text and timestamp of the task with the given id in one statement.
    /// Returns false when no row matches.
    pub fn update(&self, id: i64, text: &str, date: &str) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE tasks SET task = ?1, date = ?2 WHERE id = ?3",
            params![text, date, id],
        )?;
        Ok(rows > 0)
    }

    /// Remove the task with the given id. Returns false when no row matches.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    /// Release the connection. Dropping the store without calling this is
    /// also fine; the consuming signature exists so shutdown can surface a
    /// close failure instead of swallowing it.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Database(e))
    }

    fn parse_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            text: row.get(1)?,
            date: row.get(2)?,
        })
    }
}
