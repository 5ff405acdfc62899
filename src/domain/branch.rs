use crate::domain::BuildType;
use crate::error::{ReleaseError, Result};

/// Branch classes recognised by the release pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// Exactly `main`
    Main,
    /// Exactly `develop`
    Develop,
    /// Any branch starting with `bugfix/`
    Bugfix,
    /// Any branch starting with `feature/`
    Feature,
}

impl BranchKind {
    /// Classify a branch name.
    ///
    /// Rules are checked in order and the first match wins. Matching is exact
    /// and case-sensitive; anything else is an unsupported branch.
    pub fn classify(branch_name: &str) -> Result<Self> {
        if branch_name == "main" {
            Ok(BranchKind::Main)
        } else if branch_name == "develop" {
            Ok(BranchKind::Develop)
        } else if branch_name.starts_with("bugfix/") {
            Ok(BranchKind::Bugfix)
        } else if branch_name.starts_with("feature/") {
            Ok(BranchKind::Feature)
        } else {
            Err(ReleaseError::unsupported_branch(branch_name))
        }
    }

    /// Sequence discriminator embedded as the third version component
    pub fn sequence(&self) -> u8 {
        match self {
            BranchKind::Bugfix => 1,
            BranchKind::Main | BranchKind::Develop | BranchKind::Feature => 0,
        }
    }

    pub fn build_type(&self) -> BuildType {
        match self {
            BranchKind::Main => BuildType::Stable,
            BranchKind::Develop => BuildType::ReleaseCandidate,
            BranchKind::Bugfix | BranchKind::Feature => BuildType::Dev,
        }
    }

    /// Whether the version string carries the commit hash
    pub fn embeds_commit(&self) -> bool {
        !matches!(self, BranchKind::Main)
    }
}
