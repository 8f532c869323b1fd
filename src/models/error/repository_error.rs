use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to connect to the token registry: {0}")]
    ConnectionError(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

impl RepositoryError {
    /// Connection failures may resolve on retry, everything else is permanent.
    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::ConnectionError(_))
    }
}
