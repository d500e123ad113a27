use thiserror::Error;

/// Error taxonomy for the operational tools.
///
/// Every failure a script can hit maps onto one of these variants. Binaries
/// catch at the top of `main`, print the message with a failure marker, and
/// exit non-zero; nothing is retried.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Store or service unreachable, or a call timed out.
    #[error("connection error: {0}")]
    Connection(String),

    /// Constraint violation on write, e.g. a duplicate unique key.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Post-write read-back did not return the expected record.
    #[error("verification error: {0}")]
    Verification(String),

    /// Non-2xx HTTP response; the body is kept for diagnostics.
    #[error("http error: status {status}: {body}")]
    Http { status: u16, body: String },

    /// A body that should have been JSON was not, or a field was missing.
    #[error("parse error: {0}")]
    Parse(String),

    /// Input failed the password-strength or field rules.
    #[error("validation error: {0}")]
    Validation(String),

    /// No record matched the given identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// Failure inside a dependency that should not happen in practice.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for OpsError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => OpsError::NotFound("no matching row".to_string()),
            sqlx::Error::Database(db) => {
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation()
                {
                    OpsError::Integrity(db.to_string())
                } else {
                    OpsError::Connection(db.to_string())
                }
            }
            other => OpsError::Connection(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for OpsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            OpsError::Connection(err.to_string())
        } else if err.is_decode() {
            OpsError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            OpsError::Http {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            OpsError::Connection(err.to_string())
        }
    }
}
