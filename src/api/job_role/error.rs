/// Discriminant of [`ServiceError`], for callers that only need the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Database,
}

/// Service-level errors
///
/// The `Display` output is the message exposed to API callers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller-supplied input was rejected
    #[error("{0}")]
    Validation(String),

    /// No job role exists for the id
    #[error("Job role with ID {0} not found")]
    NotFound(i64),

    /// Any other storage failure
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Database { .. } => ErrorKind::Database,
        }
    }

    /// Builds a mapper that classifies a raw storage error as `Database`
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> ServiceError {
        move |source| ServiceError::Database { message, source }
    }
}
