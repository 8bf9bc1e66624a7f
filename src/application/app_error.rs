use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported media type")]
    UnsupportedMediaType,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Sink error: {0}")]
    Sink(String),
}

pub type AppResult<T> = Result<T, AppError>;
