use thiserror::Error;

/// Main error type for the crate.
/// Aggregates errors from the grid providers and the import pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    WithContext(String),

    #[error("{0}")]
    Grid(#[from] crate::grid::GridError),

    #[error("{0}")]
    Import(#[from] crate::import::ImportError),

    #[error("{0}")]
    Range(#[from] crate::import::RangeError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, Error> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| Error::WithContext(format!("{}: {}", message, e)))
    }
}
