use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before a valid value was provided")]
    EndOfInput,

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Plot rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
