use crate::calendar::CalendarStamp;
use crate::domain::{BranchKind, BuildType};
use crate::error::{ReleaseError, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Everything that goes into one version string.
///
/// Computed once per pipeline run and consumed immediately; nothing mutates it
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    #[serde(flatten)]
    pub stamp: CalendarStamp,
    pub sequence: u8,
    pub commit_hash: String,
    pub build_id: u64,
    pub branch_name: String,
    pub build_type: BuildType,
    #[serde(skip)]
    kind: BranchKind,
}

impl VersionInfo {
    /// Build version info for a branch, failing on unsupported branch names
    pub fn new(
        branch_name: impl Into<String>,
        commit_hash: impl Into<String>,
        build_id: u64,
        stamp: CalendarStamp,
    ) -> Result<Self> {
        let branch_name = branch_name.into();
        let kind = BranchKind::classify(&branch_name)?;

        Ok(VersionInfo {
            stamp,
            sequence: kind.sequence(),
            commit_hash: commit_hash.into(),
            build_id,
            branch_name,
            build_type: kind.build_type(),
            kind,
        })
    }

    pub fn kind(&self) -> BranchKind {
        self.kind
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}-", self.stamp, self.sequence)?;
        match self.kind {
            BranchKind::Main => write!(f, "{}", self.build_id),
            BranchKind::Develop => write!(f, "{}-rc.{}", self.commit_hash, self.build_id),
            BranchKind::Bugfix | BranchKind::Feature => {
                write!(f, "{}-dev.{}", self.commit_hash, self.build_id)
            }
        }
    }
}

static VERSION_PATTERN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

/// Compiled once; the hash group may be empty since hashes are embedded verbatim
fn version_pattern() -> Result<&'static Regex> {
    VERSION_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[vV]?(\d{2})\.(\d{2})\.(\d+)-(?:(\d+)|(.*)-(rc|dev)\.(\d+))$")
        })
        .as_ref()
        .map_err(|e| ReleaseError::version(format!("Invalid version pattern: {}", e)))
}

/// Components recovered from an existing version string or tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedVersion {
    pub year: u8,
    pub week: u8,
    pub sequence: u8,
    pub commit_hash: Option<String>,
    pub build_id: u64,
    pub build_type: BuildType,
}

impl ParsedVersion {
    /// Parse a version string such as `25.07.1-a1b2c3d-dev.7` or a tag `v25.07.0-42`.
    ///
    /// # Returns
    /// * `Ok(ParsedVersion)` - The recovered components
    /// * `Err` - If the string is not in one of the four release shapes
    ///
    /// # Example
    /// ```ignore
    /// let parsed = ParsedVersion::parse("v25.07.0-42")?;
    /// assert_eq!(parsed.build_type, BuildType::Stable);
    /// assert_eq!(parsed.commit_hash, None);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let re = version_pattern()?;

        let captures = re.captures(s).ok_or_else(|| {
            ReleaseError::version(format!(
                "'{}' does not look like a release version (YY.WW.S-...)",
                s
            ))
        })?;

        let number = |index: usize| -> Result<u64> {
            let text = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            text.parse::<u64>()
                .map_err(|_| ReleaseError::version(format!("Invalid number '{}' in '{}'", text, s)))
        };

        let year = number(1)? as u8;
        let week = number(2)? as u8;
        if week > 53 {
            return Err(ReleaseError::version(format!(
                "Week {} out of range in '{}'",
                week, s
            )));
        }

        let sequence = match number(3)? {
            0 => 0u8,
            1 => 1u8,
            other => {
                return Err(ReleaseError::version(format!(
                    "Unknown sequence discriminator {} in '{}'",
                    other, s
                )))
            }
        };

        let (commit_hash, build_id, build_type) = if captures.get(4).is_some() {
            (None, number(4)?, BuildType::Stable)
        } else {
            let hash = captures
                .get(5)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let build_type: BuildType = captures
                .get(6)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse()?;
            (Some(hash), number(7)?, build_type)
        };

        if sequence == 1 && build_type != BuildType::Dev {
            return Err(ReleaseError::version(format!(
                "Sequence 1 is only used by bugfix builds, found {} build in '{}'",
                build_type, s
            )));
        }

        Ok(ParsedVersion {
            year,
            week,
            sequence,
            commit_hash,
            build_id,
            build_type,
        })
    }

    /// Branch class that produces this shape of version
    pub fn branch_kind(&self) -> BranchKind {
        match (self.build_type, self.sequence) {
            (BuildType::Stable, _) => BranchKind::Main,
            (BuildType::ReleaseCandidate, _) => BranchKind::Develop,
            (BuildType::Dev, 1) => BranchKind::Bugfix,
            (BuildType::Dev, _) => BranchKind::Feature,
        }
    }
}
