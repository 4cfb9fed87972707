//! Error types for quicknotes.

use thiserror::Error;

/// Result type alias using quicknotes' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for quicknotes operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found. Also raised when a note exists but is owned by
    /// another user, so callers cannot distinguish the two cases.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected (e.g. duplicate email on sign-up)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("Note not found".to_string());
        assert_eq!(err.to_string(), "Not found: Note not found");
    }

    #[test]
    fn test_error_display_bad_request() {
        let err = Error::BadRequest("User with email already exists".to_string());
        assert_eq!(
            err.to_string(),
            "Bad request: User with email already exists"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing DATABASE_URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing DATABASE_URL");
    }

    #[test]
    fn test_error_display_database() {
        let err = Error::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::PoolClosed.into();
        match err {
            Error::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
