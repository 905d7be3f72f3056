use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("coordinate ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("neighborhood radius must be at least 1, got {0}")]
    InvalidRadius(usize),
}

pub type Result<T> = std::result::Result<T, SimError>;
