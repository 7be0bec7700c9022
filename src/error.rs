use thiserror::Error;

pub type LayerResult<T> = Result<T, LayerError>;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
