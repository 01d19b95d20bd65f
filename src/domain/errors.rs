use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported object type")]
    UnsupportedObjectType,
    #[error("No user IDs")]
    NoUserIds,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
