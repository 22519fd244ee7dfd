use thiserror::Error;

#[derive(Error, Debug)]
pub enum TesoreroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid period: month {month}, year {year}")]
    InvalidPeriod { month: u32, year: i32 },

    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TesoreroError>;
