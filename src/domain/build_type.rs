use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification label attached to a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "rc")]
    ReleaseCandidate,
    #[serde(rename = "dev")]
    Dev,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Stable => "stable",
            BuildType::ReleaseCandidate => "rc",
            BuildType::Dev => "dev",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stable" => Ok(BuildType::Stable),
            "rc" => Ok(BuildType::ReleaseCandidate),
            "dev" => Ok(BuildType::Dev),
            other => Err(ReleaseError::version(format!(
                "Unknown build type: '{}'",
                other
            ))),
        }
    }
}
