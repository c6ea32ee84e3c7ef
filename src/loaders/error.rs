use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV record")]
    Csv(#[from] csv::Error),
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed JSON payload")]
    Json(#[from] serde_json::Error),
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error("{0} returned no driver")]
    Empty(&'static str),
}
