use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create the report output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write the report document '{path}': {source}")]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },
}
