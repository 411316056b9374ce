use thiserror::Error;

/// Failure at the persistence boundary. Repository implementations collapse
/// their driver errors into this before the service layer sees them.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// The closed set of failure kinds raised by services and interpreted by the
/// HTTP layer. Each kind carries its wire message via `Display`; the kind
/// identifier returned by [`ServiceError::name`] drives the `error_name`
/// field on creation failures.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("{0}")]
    GetAll(String),

    #[error("{0}")]
    Creation(String),

    #[error("Failed to update record")]
    Update,

    #[error("Failed to delete record")]
    Delete,

    #[error("Record has not found yet")]
    RecordNotFound,

    /// Untranslated repository failure. Only `get_all_patients` lets this
    /// escape, matching the original behavior of that one method.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Taxonomy kind identifier.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceError::GetAll(_) => "GetAllError",
            ServiceError::Creation(_) => "CreationError",
            ServiceError::Update => "UpdateError",
            ServiceError::Delete => "DeleteError",
            ServiceError::RecordNotFound => "RecordNotFound",
            ServiceError::Repository(_) => "RepositoryError",
        }
    }
}
