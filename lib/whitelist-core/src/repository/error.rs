use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}
