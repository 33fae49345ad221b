//! Local forecast store.
//!
//! One SQLite table of forecast days, keyed by the string identity derived
//! during a refresh. Writes always replace the whole snapshot; readers
//! observe changes through a watch channel, making the store the single
//! source of truth the UI renders from.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};
use weathertracker_core::ForecastDay;

use crate::error::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS forecast (
    id          TEXT PRIMARY KEY,
    date        INTEGER NOT NULL,
    temp_day    REAL NOT NULL,
    temp_min    REAL NOT NULL,
    temp_max    REAL NOT NULL,
    humidity    INTEGER NOT NULL,
    wind_speed  REAL NOT NULL,
    description TEXT NOT NULL,
    icon        TEXT NOT NULL
)";

const SELECT_COLUMNS: &str =
    "id, date, temp_day, temp_min, temp_max, humidity, wind_speed, description, icon";

/// Returns the default database path,
/// `<data_dir>/weathertracker/forecast.db`.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weathertracker")
        .join("forecast.db")
}

// ============================================================================
// Forecast Store
// ============================================================================

/// SQLite-backed store of forecast days.
///
/// Observable via a watch channel whose value is a version counter bumped
/// on every write.
pub struct ForecastStore {
    conn: Mutex<Connection>,
    changes: watch::Sender<u64>,
}

impl ForecastStore {
    /// Opens (and if necessary creates) a store at the given path.
    ///
    /// # Errors
    ///
    /// Fails when the parent directory cannot be created or the database
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Forecast store opened");
        Self::with_connection(conn)
    }

    /// Opens an in-memory store.
    ///
    /// # Errors
    ///
    /// Fails when the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        let (changes, _) = watch::channel(0);
        Ok(Self {
            conn: Mutex::new(conn),
            changes,
        })
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Returns every stored forecast day, ordered by date ascending.
    ///
    /// # Errors
    ///
    /// Fails on a database error.
    pub async fn all_days(&self) -> Result<Vec<ForecastDay>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM forecast ORDER BY date ASC"
        ))?;
        let rows = stmt.query_map([], row_to_day)?;

        let mut days = Vec::new();
        for row in rows {
            days.push(row?);
        }
        Ok(days)
    }

    /// Returns the forecast day with the given identity, if present.
    ///
    /// # Errors
    ///
    /// Fails on a database error.
    pub async fn day_by_id(&self, id: &str) -> Result<Option<ForecastDay>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM forecast WHERE id = ?1"))?;
        Ok(stmt.query_row(params![id], row_to_day).optional()?)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Replaces the whole snapshot in one transaction.
    ///
    /// Delete-all then insert-all; an empty slice is a valid snapshot and
    /// leaves the table empty. Subscribers are notified once, after commit.
    ///
    /// # Errors
    ///
    /// Fails on a database error; the previous snapshot stays intact.
    pub async fn replace_all(&self, days: &[ForecastDay]) -> Result<(), StoreError> {
        {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM forecast", [])?;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR REPLACE INTO forecast \
                     (id, date, temp_day, temp_min, temp_max, humidity, wind_speed, description, icon) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                )?;
                for day in days {
                    stmt.execute(params![
                        day.id,
                        day.date,
                        day.temp_day,
                        day.temp_min,
                        day.temp_max,
                        day.humidity,
                        day.wind_speed,
                        day.description,
                        day.icon,
                    ])?;
                }
            }
            tx.commit()?;
        }
        self.notify_change();
        debug!(count = days.len(), "Forecast snapshot replaced");
        Ok(())
    }

    /// Deletes every stored forecast day.
    ///
    /// # Errors
    ///
    /// Fails on a database error.
    pub async fn delete_all(&self) -> Result<(), StoreError> {
        {
            let conn = self.conn.lock().await;
            conn.execute("DELETE FROM forecast", [])?;
        }
        self.notify_change();
        debug!("Forecast snapshot cleared");
        Ok(())
    }

    // ========================================================================
    // Observable
    // ========================================================================

    /// Subscribes to store changes.
    ///
    /// The watch value is a version counter; every write bumps it exactly
    /// once.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Notifies subscribers of a change.
    fn notify_change(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}

fn row_to_day(row: &rusqlite::Row<'_>) -> rusqlite::Result<ForecastDay> {
    Ok(ForecastDay {
        id: row.get(0)?,
        date: row.get(1)?,
        temp_day: row.get(2)?,
        temp_min: row.get(3)?,
        temp_max: row.get(4)?,
        humidity: row.get(5)?,
        wind_speed: row.get(6)?,
        description: row.get(7)?,
        icon: row.get(8)?,
    })
}

// ============================================================================
// Tests
// ============================================================================
