use crate::error::{ReleaseError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    branch: Option<String>,
    head: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out a branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the HEAD commit id
    pub fn with_head(mut self, commit_id: impl Into<String>) -> Self {
        self.head = Some(commit_id.into());
        self
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn head_commit_id(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| ReleaseError::input("Mock repository has no HEAD commit"))
    }
}
