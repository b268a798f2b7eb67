//! SQLite access for the team statistics file.
//!
//! ## Connectivity
//!
//! - [`db()`] — Opens the database file read-only and verifies its layout
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and statement generation
//! - [`COLUMNS`] — The declared, versioned column list
//! - [`Check`] — Startup verification and status reporting
mod check;
#[cfg(any(test, feature = "fixture"))]
mod fixture;
mod schema;

pub use check::*;
#[cfg(any(test, feature = "fixture"))]
pub use fixture::*;
pub use schema::*;

use anyhow::Context;
use rusqlite::Connection;
use rusqlite::OpenFlags;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

/// Connection shared across request handlers.
pub type Shared = Arc<Mutex<Connection>>;

/// Opens the statistics database.
///
/// The file is opened read-only: the application never writes to it.
/// Fails fast if the file is missing or its layout does not match
/// [`COLUMNS`], then logs a short status table.
pub fn db(path: &Path) -> anyhow::Result<Shared> {
    log::info!("opening database {}", path.display());
    if !path.is_file() {
        anyhow::bail!("database file {} not found", path.display());
    }
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .with_context(|| format!("open sqlite db {}", path.display()))?;
    conn.verify()?;
    conn.status()?;
    Ok(Arc::new(Mutex::new(conn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let err = db(&dir.path().join("absent.sqlite")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn opens_verified_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&TeamStats::creates()).unwrap();
        drop(conn);
        assert!(db(&path).is_ok());
    }

    #[test]
    fn rejects_file_with_wrong_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(const_format::concatcp!(
            "CREATE TABLE ",
            nfl_core::TEAM_STATS,
            " (team_id INTEGER, variable TEXT)"
        ))
        .unwrap();
        drop(conn);
        let err = db(&path).unwrap_err().to_string();
        assert!(err.contains("missing columns"), "{}", err);
    }
}
