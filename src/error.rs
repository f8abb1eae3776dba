use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No "Office Listings" marker; the document still yields one diagnostic row.
    #[error("'Office Listings' section missing in file {file}")]
    MissingSection { file: String },

    /// No GPO header marker, so name and party fall back to placeholders.
    #[error("GPO header marker missing in file {file}")]
    MissingHeaderMarker { file: String },

    #[error("filename does not match the CDIR pattern: {file}")]
    BadFilename { file: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
