//! Error types shared by the query builder, the data access layer and the handlers.

use thiserror::Error;

/// Failures while talking to the database.
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection could be taken from the pool (exhausted past the
    /// acquire timeout, or the pool is closed).
    #[error("Failed to acquire a pooled connection: {0}")]
    Acquire(#[source] sqlx::Error),

    /// The statement itself failed: syntax, constraint violation, type mismatch.
    #[error("Statement failed: {0}")]
    Statement(#[source] sqlx::Error),

    /// A returned value could not be represented in the tabular result.
    #[error("Failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            DbError::Acquire(_) => "acquire",
            DbError::Statement(_) => "statement",
            DbError::Decode { .. } => "decode",
        }
    }
}

/// Untrusted request input that cannot be turned into a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown comparator '{0}', expected one of <, <=, =, >=, >")]
    UnknownComparator(String),

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Invalid age '{0}', expected an integer")]
    InvalidAge(String),
}
