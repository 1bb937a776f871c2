//! Read-only access to the prebuilt player database.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OpenFlags, params};

use crate::fetch;

const REQUIRED_TABLES: [&str; 2] = ["schedule", "players"];

/// Open the player database read-only and verify it has the expected
/// tables. The returned handle is passed explicitly to every query; there
/// is no process-wide connection.
pub fn open_player_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("open player db {}", path.display()))?;
    verify_schema(&conn)?;
    Ok(conn)
}

fn verify_schema(conn: &Connection) -> Result<()> {
    for table in REQUIRED_TABLES {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )
            .context("probe sqlite_master")?;
        if found == 0 {
            return Err(anyhow!("player db is missing the '{table}' table"));
        }
    }
    Ok(())
}

/// Resolve a database source to a local file. Accepts a filesystem path or
/// an http(s) URL; URLs are downloaded into the cache dir first.
pub fn resolve_database(source: &str, refresh: bool) -> Result<PathBuf> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetch::fetch_db_cached(source, refresh);
    }
    let path = PathBuf::from(source);
    if !path.exists() {
        return Err(anyhow!("database file not found: {}", path.display()));
    }
    Ok(path)
}
