use std::path::PathBuf;

use datatable_lib::error::{ConfigError, DataError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Failed to encode event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
