use adakit_indexer::IndexerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error(transparent)]
    Indexer(#[from] IndexerError),
}
