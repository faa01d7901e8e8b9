use thiserror::Error;

/// Result type for vidboard-api operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Application error types.
///
/// A missing target and a target owned by somebody else collapse into the
/// same `NotFoundForAuthor` error on purpose: callers must not be able to
/// probe for the existence of other users' resources. Errors cross into the
/// GraphQL error list as their `Display` strings only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid identity attached to the request
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Target id missing, or not owned by the caller
    #[error("No {0} with the given ID found for the author")]
    NotFoundForAuthor(&'static str),

    /// Login with an unknown access token
    #[error("User does not exist")]
    UserNotFound,

    /// Token issuance failed
    #[error("Token error: {0}")]
    Token(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_does_not_reveal_cause() {
        // Same message whether the row is missing or owned by someone else.
        assert_eq!(
            ApiError::NotFoundForAuthor("post").to_string(),
            "No post with the given ID found for the author"
        );
        assert_eq!(
            ApiError::NotFoundForAuthor("comment").to_string(),
            "No comment with the given ID found for the author"
        );
    }

    #[test]
    fn unauthenticated_message() {
        assert_eq!(ApiError::Unauthenticated.to_string(), "Unauthenticated");
    }
}
