// src/error.rs
//
// Error taxonomy. Each variant family is terminal at its own layer:
// fetch errors end up as a message in the result store, persistence errors
// are swallowed by the store (logged, degraded to empty state), export
// errors become a transient toast.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search failed: HTTP {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no search criteria given")]
    EmptyQuery,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cache io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cache is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data available to export.")]
    NoData,
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
