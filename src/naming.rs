//! Artifact naming derived from a resolved version string.
//!
//! The installer definitions find the executable by exact filename, so the
//! names produced here and [`locate_executable`] must stay in lock-step.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Config;
use crate::error::{ReleaseError, Result};

/// Target platform of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    /// Platform of the running host
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Extension appended to executable names, including the dot
    pub fn executable_extension(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(ReleaseError::input(format!(
                "Unknown platform '{}' (expected windows or linux)",
                other
            ))),
        }
    }
}

/// Names of the files produced for one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    /// Version string after the optional postfix was applied
    pub version: String,
    pub executable: String,
    pub installer: String,
}

/// Prefixes used to build artifact and tag names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    pub product: String,
    pub tag_prefix: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        NamingScheme {
            product: "tasa".to_string(),
            tag_prefix: "v".to_string(),
        }
    }
}

impl NamingScheme {
    pub fn from_config(config: &Config) -> Self {
        NamingScheme {
            product: config.product.name.clone(),
            tag_prefix: config.naming.tag_prefix.clone(),
        }
    }

    /// Derive executable and installer names.
    ///
    /// # Arguments
    /// * `version` - Resolved version string
    /// * `platform` - Selects the executable extension
    /// * `postfix` - Optional text appended to the version first; `None` or empty leaves it unchanged
    ///
    /// # Example
    /// ```ignore
    /// let names = NamingScheme::default().artifact_names("25.07.0-42", Platform::Windows, None);
    /// assert_eq!(names.executable, "tasa-25.07.0-42.exe");
    /// assert_eq!(names.installer, "tasa-installer-25.07.0-42");
    /// ```
    pub fn artifact_names(
        &self,
        version: &str,
        platform: Platform,
        postfix: Option<&str>,
    ) -> ArtifactNames {
        let version = apply_postfix(version, postfix);

        ArtifactNames {
            executable: format!(
                "{}-{}{}",
                self.product,
                version,
                platform.executable_extension()
            ),
            installer: format!("{}-installer-{}", self.product, version),
            version,
        }
    }

    /// Source-control tag for a version. Never carries the postfix.
    pub fn tag_name(&self, version: &str) -> String {
        format!("{}{}", self.tag_prefix, version)
    }
}

/// Append a free-form postfix to a version string
pub fn apply_postfix(version: &str, postfix: Option<&str>) -> String {
    match postfix {
        Some(postfix) if !postfix.is_empty() => format!("{}{}", version, postfix),
        _ => version.to_string(),
    }
}

/// Find the executable named by `names` in `dir`.
///
/// Only an exact filename match counts. When the file is missing, the error
/// lists other files that share the product prefix so naming drift is easy to spot.
///
/// # Returns
/// * `Ok(PathBuf)` - Path to the executable
/// * `Err(ReleaseError::Artifact)` - If `dir` is not a directory or the file is missing
pub fn locate_executable(dir: &Path, names: &ArtifactNames, scheme: &NamingScheme) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(ReleaseError::artifact(format!(
            "Artifact directory not found: {}",
            dir.display()
        )));
    }

    let candidate = dir.join(&names.executable);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "located executable");
        return Ok(candidate);
    }

    let prefix = format!("{}-", scheme.product);
    let mut near_misses: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
        .filter(|name| name.starts_with(&prefix))
        .collect();
    near_misses.sort();

    let mut msg = format!(
        "Expected executable '{}' in {}",
        names.executable,
        dir.display()
    );
    if !near_misses.is_empty() {
        msg.push_str(&format!("; found: {}", near_misses.join(", ")));
    }

    Err(ReleaseError::artifact(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_names() {
        let names = NamingScheme::default().artifact_names("25.07.0-42", Platform::Windows, None);
        assert_eq!(names.version, "25.07.0-42");
        assert_eq!(names.executable, "tasa-25.07.0-42.exe");
        assert_eq!(names.installer, "tasa-installer-25.07.0-42");
    }

    #[test]
    fn test_linux_names() {
        let names = NamingScheme::default().artifact_names("25.07.0-42", Platform::Linux, None);
        assert_eq!(names.executable, "tasa-25.07.0-42");
    }

    #[test]
    fn test_postfix_applies_to_artifacts_not_tag() {
        let scheme = NamingScheme::default();
        let names = scheme.artifact_names("25.07.0-42", Platform::Windows, Some("-beta"));
        assert_eq!(names.executable, "tasa-25.07.0-42-beta.exe");
        assert_eq!(names.installer, "tasa-installer-25.07.0-42-beta");
        assert_eq!(scheme.tag_name("25.07.0-42"), "v25.07.0-42");
    }

    #[test]
    fn test_empty_postfix_is_absent() {
        assert_eq!(apply_postfix("25.07.0-42", Some("")), "25.07.0-42");
        assert_eq!(apply_postfix("25.07.0-42", None), "25.07.0-42");
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert!("macos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_locate_missing_directory() {
        let names = NamingScheme::default().artifact_names("25.07.0-42", Platform::Linux, None);
        let err = locate_executable(
            Path::new("/nonexistent/dist"),
            &names,
            &NamingScheme::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Artifact directory not found"));
    }
}
