use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown season token: '{0}'")]
    UnknownSeason(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
