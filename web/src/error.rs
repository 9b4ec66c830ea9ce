use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read place data from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid place data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Store not initialized. Call init_store() first.")]
    NotInitialized,

    #[error("Store already initialized")]
    AlreadyInitialized,
}
