use thiserror::Error;

/// Unified error type for bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("tag resolution failed: {0}")]
    Resolve(String),

    #[error("version parsing error: {0}")]
    Version(String),

    #[error("tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a precondition error with context
    pub fn precondition(msg: impl Into<String>) -> Self {
        BumpError::Precondition(msg.into())
    }

    /// Create a tag-resolution error with context
    pub fn resolve(msg: impl Into<String>) -> Self {
        BumpError::Resolve(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(BumpError::version("test").to_string().contains("version"));
        assert!(BumpError::tag("test").to_string().contains("tag"));
        assert!(BumpError::resolve("test")
            .to_string()
            .contains("tag resolution"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "configuration error"),
            (BumpError::precondition("x"), "precondition failed"),
            (BumpError::resolve("x"), "tag resolution failed"),
            (BumpError::version("x"), "version parsing error"),
            (BumpError::tag("x"), "tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
