use thiserror::Error;

/// Unified error type for tasa-version operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Unsupported branch: '{0}' (expected main, develop, bugfix/* or feature/*)")]
    UnsupportedBranch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tasa-version
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an unsupported-branch error for the given branch name
    pub fn unsupported_branch(branch: impl Into<String>) -> Self {
        ReleaseError::UnsupportedBranch(branch.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create an artifact error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        ReleaseError::Artifact(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        ReleaseError::Input(msg.into())
    }

    /// True when the error is the fatal branch classification failure
    pub fn is_unsupported_branch(&self) -> bool {
        matches!(self, ReleaseError::UnsupportedBranch(_))
    }
}
