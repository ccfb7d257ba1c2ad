//! Error taxonomy for the order core.
//!
//! Three kinds cross the service boundary: violated business rules, missing
//! entities on read paths, and store failures. The external boundary maps
//! [`OrderError::code`] onto its own response semantics; the core stays
//! transport-free.

use thiserror::Error;

/// Failure in the backing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The store rejected a write (duplicate key, check violation).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Connectivity or query failure.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() || db.is_check_violation() => {
                PersistenceError::Constraint(db.message().to_string())
            }
            _ => PersistenceError::Database(e.to_string()),
        }
    }
}

/// Domain error returned by [`OrderService`](crate::services::OrderService).
///
/// No operation retries internally; every error is scoped to the single
/// request that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A violated domain rule; recoverable with different input.
    #[error("{0}")]
    Business(String),

    /// Requested entity does not exist for a read operation.
    #[error("{0}")]
    NotFound(String),

    /// Store failure, propagated unchanged.
    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistenceError),
}

impl OrderError {
    pub fn business(msg: impl Into<String>) -> Self {
        OrderError::Business(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        OrderError::NotFound(msg.into())
    }

    /// Stable machine code for boundary-side translation.
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::Business(_) => "BUSINESS_RULE",
            OrderError::NotFound(_) => "NOT_FOUND",
            OrderError::Persistence(_) => "PERSISTENCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(OrderError::business("bad value").code(), "BUSINESS_RULE");
        assert_eq!(OrderError::not_found("missing").code(), "NOT_FOUND");
        assert_eq!(
            OrderError::from(PersistenceError::Database("down".into())).code(),
            "PERSISTENCE"
        );
    }

    #[test]
    fn test_display() {
        let err = OrderError::business("order value must be greater than zero");
        assert_eq!(err.to_string(), "order value must be greater than zero");

        let err = OrderError::from(PersistenceError::Constraint("duplicate key".into()));
        assert_eq!(
            err.to_string(),
            "persistence failure: constraint violation: duplicate key"
        );
    }

    #[test]
    fn test_sqlx_error_maps_to_database() {
        let err = PersistenceError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, PersistenceError::Database(_)));
    }
}
