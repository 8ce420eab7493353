use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirstPassError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Collection error: {0}")]
    Collection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
