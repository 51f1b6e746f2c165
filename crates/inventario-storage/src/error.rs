/// Errors that can occur within the storage layer.
///
/// # Examples
///
/// ```
/// use inventario_storage::StorageError;
/// use sea_orm::DbErr;
///
/// let err = StorageError::from(DbErr::Custom("connection refused".to_string()));
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An underlying database error (connectivity, constraint, I/O).
    #[error("Storage: database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
