use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyFitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Layout Definition Error: {0}")]
    Layout(String),

    #[error("Unknown layout '{0}'")]
    UnknownLayout(String),

    /// Ratios over a tally with no recognized keystrokes are undefined.
    #[error("Undefined statistics: sample contains no recognized keystrokes")]
    EmptySample,
}

pub type KfResult<T> = Result<T, KeyFitError>;
