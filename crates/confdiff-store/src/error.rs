/// Errors from permalink store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store reached its capacity cap and the save was rejected.
    #[error("permalink storage is full ({max_entries} entries)")]
    CapacityExhausted { max_entries: usize },

    /// No unused id could be generated within the attempt budget.
    #[error("could not allocate a unique permalink id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
