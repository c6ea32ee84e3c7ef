#![allow(clippy::cast_sign_loss)]

use super::{FetchError, Loader, finish};
use crate::model::Driver;
use async_trait::async_trait;
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::str::FromStr;
use tracing::{debug, trace};

const DRIVERS_QUERY: &str =
    "SELECT name, team, championships, wins, podiums, starts, points, rookie FROM drivers";

/// Read drivers from the `drivers` table of a SQL database. The connection
/// is opened when loading.
pub struct DatabaseLoader {
    url: String,
}

impl DatabaseLoader {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
        }
    }

    async fn connect(&self) -> Result<AnyConnection, sqlx::Error> {
        sqlx::any::install_default_drivers();
        AnyConnection::connect_with(&AnyConnectOptions::from_str(&self.url)?).await
    }

    fn driver_from_row(row: &AnyRow) -> Result<Driver, sqlx::Error> {
        let count = |column: &str| -> Result<u32, sqlx::Error> {
            Ok(count_from(row.try_get::<Option<i32>, _>(column)?))
        };
        Ok(Driver {
            name: row.try_get("name")?,
            team: row.try_get::<Option<String>, _>("team")?.unwrap_or_default(),
            championships: count("championships")?,
            wins: count("wins")?,
            podiums: count("podiums")?,
            starts: count("starts")?,
            points: row.try_get::<Option<f64>, _>("points")?.unwrap_or_default(),
            rookie: flag_from(row.try_get::<Option<i32>, _>("rookie")?),
        })
    }
}

/// Counters are stored as signed SQL integers. NULL and negative values count
/// as zero.
fn count_from(value: Option<i32>) -> u32 {
    value.unwrap_or(0).max(0) as u32
}

fn flag_from(value: Option<i32>) -> bool {
    value.is_some_and(|v| v != 0)
}

#[async_trait]
impl Loader for DatabaseLoader {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn load(&mut self) -> Result<Vec<Driver>, FetchError> {
        let mut conn = self.connect().await?;
        let drivers = sqlx::query(DRIVERS_QUERY)
            .try_map(|row: AnyRow| Self::driver_from_row(&row))
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;
        for driver in &drivers {
            trace!(driver = %driver, "driver loaded");
        }
        debug!(count = drivers.len(), "drivers read from database");
        finish(self.name(), drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_from() {
        assert_eq!(count_from(Some(62)), 62);
        assert_eq!(count_from(Some(0)), 0);
        assert_eq!(count_from(Some(-4)), 0);
        assert_eq!(count_from(None), 0);
    }

    #[test]
    fn test_flag_from() {
        assert!(flag_from(Some(1)));
        assert!(flag_from(Some(-1)));
        assert!(!flag_from(Some(0)));
        assert!(!flag_from(None));
    }

    #[tokio::test]
    async fn test_unreachable_database() {
        let mut loader = DatabaseLoader::new("mysql://f1:f1@127.0.0.1:9/f1");
        assert!(matches!(loader.load().await, Err(FetchError::Database(_))));
    }

    #[tokio::test]
    async fn test_malformed_url() {
        let mut loader = DatabaseLoader::new("not a database url");
        assert!(matches!(loader.load().await, Err(FetchError::Database(_))));
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;

    const SCHEMA: &str = "CREATE TABLE drivers (name TEXT NOT NULL, team TEXT,
        championships INTEGER, wins INTEGER, podiums INTEGER, starts INTEGER,
        points REAL, rookie INTEGER)";

    async fn database(statements: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("f1.db").display());
        let loader = DatabaseLoader::new(&url);
        let mut conn = loader.connect().await.unwrap();
        sqlx::raw_sql(statements).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
        (dir, url)
    }

    #[tokio::test]
    async fn test_load_from_sqlite() {
        let (_dir, url) = database(&format!(
            "{SCHEMA};
             INSERT INTO drivers VALUES ('Charles Leclerc', 'Ferrari', 0, 9, 30, 145, 1078.0, 0);
             INSERT INTO drivers VALUES ('Oliver Bearman', NULL, 0, 0, 0, 0, 0.0, 1);"
        ))
        .await;
        let drivers = DatabaseLoader::new(&url).load().await.unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].wins, 9);
        assert_eq!(drivers[0].points, 1078.0);
        assert_eq!(drivers[1].team, "Haas");
        assert!(drivers[1].rookie);
    }

    #[tokio::test]
    async fn test_empty_table() {
        let (_dir, url) = database(SCHEMA).await;
        assert!(matches!(
            DatabaseLoader::new(&url).load().await,
            Err(FetchError::Empty("database"))
        ));
    }

    #[tokio::test]
    async fn test_missing_table() {
        let (_dir, url) = database("CREATE TABLE teams (name TEXT)").await;
        assert!(matches!(
            DatabaseLoader::new(&url).load().await,
            Err(FetchError::Database(_))
        ));
    }
}
