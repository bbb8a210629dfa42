use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("cannot compute savings for empty original text")]
    EmptyOriginal,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CompressError>;
