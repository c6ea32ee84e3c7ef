use crate::model::Driver;
use async_trait::async_trait;

pub use self::csv_loader::CsvLoader;
pub use self::database_loader::DatabaseLoader;
pub use self::error::FetchError;
pub use self::fixture::FixtureLoader;
pub use self::http_loader::{DEFAULT_TIMEOUT, HttpLoader};

mod csv_loader;
mod database_loader;
mod error;
mod fixture;
mod http_loader;

#[async_trait]
pub trait Loader: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Load every driver known to the source.
    async fn load(&mut self) -> Result<Vec<Driver>, FetchError>;
}

/// Complete loaded drivers and reject an empty result, so that callers may
/// substitute another source.
fn finish(source: &'static str, drivers: Vec<Driver>) -> Result<Vec<Driver>, FetchError> {
    if drivers.is_empty() {
        return Err(FetchError::Empty(source));
    }
    Ok(drivers.into_iter().map(Driver::with_known_team).collect())
}
