use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid crop region: {0}")]
    InvalidCropRegion(String),

    #[error("Invalid image buffer: {0}")]
    InvalidImageBuffer(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid artwork status: {0}")]
    InvalidStatus(String),

    #[error("Invalid image index: {0}")]
    InvalidImageIndex(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
