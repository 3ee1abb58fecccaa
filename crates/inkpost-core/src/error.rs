//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type}에서 ID {id}를 찾을 수 없습니다.")]
    NotFound { entity_type: &'static str, id: String },

    #[error("자격 증명에 실패하였습니다.")]
    CertificationCodeNotMatched,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Mail delivery failed: {0}")]
    Mail(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
