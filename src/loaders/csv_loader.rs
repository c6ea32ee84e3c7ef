use super::{FetchError, Loader, finish};
use crate::model::Driver;
use async_trait::async_trait;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Read drivers from a headered CSV file, one driver per row.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse<R: Read>(reader: R) -> Result<Vec<Driver>, FetchError> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .deserialize::<Driver>()
            .map(|record| record.map_err(FetchError::from))
            .collect()
    }
}

#[async_trait]
impl Loader for CsvLoader {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn load(&mut self) -> Result<Vec<Driver>, FetchError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let drivers = Self::parse(content.as_slice())?;
        debug!(path = %self.path.display(), count = drivers.len(), "drivers read");
        finish(self.name(), drivers)
    }
}
