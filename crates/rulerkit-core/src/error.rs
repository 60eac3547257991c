use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid step: {0} (must be a finite number greater than zero)")]
    InvalidStep(f64),

    #[error("Invalid bounds: {lower}...{upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("Invalid cell width: {0} (must be a finite number greater than zero)")]
    InvalidCellWidth(f64),

    #[error("Invalid fraction count: {0}")]
    InvalidFractions(u32),

    #[error("Invalid physics parameter: {0}")]
    InvalidPhysics(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
