use std::fmt;

/// Warnings about inputs that sit on an edge of the versioning rules.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// ISO and Sunday week numbering put the build date in different years
    YearBoundary {
        date: String,
        convention: String,
        stamp: String,
    },
    /// The local repository has no checked-out branch
    DetachedHead { commit_hash: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::YearBoundary {
                date,
                convention,
                stamp,
            } => {
                write!(
                    f,
                    "Build date {} is on a year boundary; {} week numbering gives {}",
                    date, convention, stamp
                )
            }
            BoundaryWarning::DetachedHead { commit_hash } => {
                write!(
                    f,
                    "HEAD is detached at {}; pass --branch to name the branch",
                    crate::git::short_hash(commit_hash, 7)
                )
            }
        }
    }
}
