//! Git repository abstraction for input discovery
//!
//! When the CI environment does not supply the branch or commit, they are
//! read from the local repository.
//!
//! - [repository::Git2Repository]: The real implementation using `git2`
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Code that only needs the branch and commit should depend on the
//! [Repository] trait rather than a concrete implementation.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the checked-out revision
pub trait Repository {
    /// Short name of the checked-out branch
    ///
    /// # Returns
    /// * `Ok(Some(name))` - e.g. "main" or "feature/login"
    /// * `Ok(None)` - If HEAD is detached
    /// * `Err` - If HEAD cannot be read
    fn current_branch(&self) -> Result<Option<String>>;

    /// Full hex id of the HEAD commit
    fn head_commit_id(&self) -> Result<String>;
}

/// Shorten a commit id to at most `len` characters
pub fn short_hash(full: &str, len: usize) -> String {
    full.chars().take(len).collect()
}
