use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadSageError {
    #[error("Telemetry file not found at: '{0}'")]
    DataNotFound(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet Error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Endpoint Error: {0}")]
    Endpoint(String),
}

pub type RsResult<T> = Result<T, RoadSageError>;
