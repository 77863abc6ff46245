//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database pool is built.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the parent directory of a file-backed SQLite URL exists.
///
/// Postgres URLs and in-memory SQLite are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return Ok(());
    }
    let Some(dir) = Path::new(path).parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "sqlite data directory missing; creating it");
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
        info!(dir = %dir.display(), "sqlite data directory created");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn postgres_and_memory_urls_are_ignored() {
        ensure_sqlite_dir("postgres://u:p@localhost/db").await.unwrap();
        ensure_sqlite_dir("sqlite::memory:").await.unwrap();
    }

    #[tokio::test]
    async fn creates_parent_directory_for_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/nested/app.db?mode=rwc", dir.path().display());
        ensure_sqlite_dir(&url).await.unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
