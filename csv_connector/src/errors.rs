use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("File system access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed delimited data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Input file {0} does not exist, run the `urls` phase first")]
    InputMissing(PathBuf),
    #[error("Input file {1} is missing the required '{0}' column")]
    MissingColumn(&'static str, PathBuf),
}
