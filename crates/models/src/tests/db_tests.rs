use crate::db::{connect_in_memory, connect_with_config, migrate, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;
use std::time::Duration;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_in_memory().await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Test connection with custom configuration
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    let mut config = DatabaseConfig::in_memory();
    config.connect_timeout = Duration::from_secs(5);
    config.acquire_timeout = Duration::from_secs(5);

    let db = connect_with_config(&config).await?;
    migrate(&db).await?;
    // Re-running is a no-op once every migration is recorded.
    migrate(&db).await?;

    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'favourites'".to_string(),
    );
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

#[test]
fn config_maps_seconds_to_durations() {
    let raw = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        connect_timeout_secs: 7,
        acquire_timeout_secs: 9,
        ..configs::DatabaseConfig::default()
    };
    let cfg = DatabaseConfig::from(&raw);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(7));
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(9));
    assert_eq!(cfg.url, "sqlite::memory:");
}
