//! Rendering a resolution for people and for CI steps.

use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::domain::BuildType;
use crate::error::{ReleaseError, Result};
use crate::naming::{ArtifactNames, Platform};
use crate::release::ReleasePlan;
use crate::resolver::ResolvedVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// `key=value` lines, the format of `$GITHUB_OUTPUT`
    Env,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReleaseError::input(format!(
                "Unknown output format '{}' (expected text, env or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Env => write!(f, "env"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything a pipeline needs from one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub version: String,
    pub build_type: BuildType,
    pub branch: String,
    pub platform: Platform,
    pub executable: String,
    pub installer: String,
    pub tag: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl ResolutionReport {
    pub fn new(
        resolved: &ResolvedVersion,
        names: &ArtifactNames,
        plan: &ReleasePlan,
        platform: Platform,
    ) -> Self {
        ResolutionReport {
            version: resolved.version.clone(),
            build_type: resolved.build_type,
            branch: resolved.info.branch_name.clone(),
            platform,
            executable: names.executable.clone(),
            installer: names.installer.clone(),
            tag: plan.tag.clone(),
            title: plan.title.clone(),
            body: plan.body.clone(),
            draft: plan.draft,
            prerelease: plan.prerelease,
        }
    }

    /// Single-line fields in output order. The multi-line body is left out.
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("version", self.version.clone()),
            ("build_type", self.build_type.to_string()),
            ("branch", self.branch.clone()),
            ("platform", self.platform.to_string()),
            ("executable", self.executable.clone()),
            ("installer", self.installer.clone()),
            ("tag", self.tag.clone()),
            ("title", self.title.clone()),
            ("draft", self.draft.to_string()),
            ("prerelease", self.prerelease.to_string()),
        ]
    }
}

/// Render a report in the requested format
pub fn render(report: &ResolutionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Env => render_env(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| ReleaseError::input(format!("Cannot serialize report: {}", e))),
    }
}

fn render_text(report: &ResolutionReport) -> String {
    let mut out = String::new();
    for (key, value) in report.fields() {
        out.push_str(&format!("{:<12} {}\n", format!("{}:", key), value));
    }
    out
}

/// One `key=value` line per field; values holding a line break are rejected.
pub fn render_env(report: &ResolutionReport) -> Result<String> {
    let mut out = String::new();
    for (key, value) in report.fields() {
        if value.contains(['\n', '\r']) {
            return Err(ReleaseError::input(format!(
                "Output value for '{}' contains a line break",
                key
            )));
        }
        out.push_str(&format!("{}={}\n", key, value));
    }
    Ok(out)
}

/// Append the `key=value` rendering to a CI output file, creating it if needed
pub fn append_github_output(path: &Path, report: &ResolutionReport) -> Result<()> {
    let rendered = render_env(report)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(rendered.as_bytes())?;
    tracing::info!(path = %path.display(), "appended step outputs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarStamp;
    use crate::config::Config;
    use crate::naming::NamingScheme;
    use crate::resolver::resolve_with_stamp;

    fn report() -> ResolutionReport {
        report_for_commit("a1b2c3d")
    }

    fn report_for_commit(commit: &str) -> ResolutionReport {
        let resolved = resolve_with_stamp("develop", commit, 42, CalendarStamp::new(25, 7)).unwrap();
        let config = Config::default();
        let names = NamingScheme::from_config(&config).artifact_names(
            &resolved.version,
            Platform::Windows,
            None,
        );
        let plan = ReleasePlan::from_resolved(&resolved, &config);
        ResolutionReport::new(&resolved, &names, &plan, Platform::Windows)
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("env".parse::<OutputFormat>().unwrap(), OutputFormat::Env);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_env() {
        let env = render(&report(), OutputFormat::Env).unwrap();
        assert!(env.starts_with("version=25.07.0-a1b2c3d-rc.42\n"));
        assert!(env.contains("build_type=rc\n"));
        assert!(env.contains("executable=tasa-25.07.0-a1b2c3d-rc.42.exe\n"));
        assert!(env.contains("installer=tasa-installer-25.07.0-a1b2c3d-rc.42\n"));
        assert!(env.contains("tag=v25.07.0-a1b2c3d-rc.42\n"));
        assert!(env.contains("draft=false\n"));
        assert!(env.contains("prerelease=true\n"));
        assert!(!env.contains("Commit:"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "25.07.0-a1b2c3d-rc.42");
        assert_eq!(value["build_type"], "rc");
        assert_eq!(value["platform"], "windows");
        assert_eq!(value["prerelease"], true);
    }

    #[test]
    fn test_render_text() {
        let text = render(&report(), OutputFormat::Text).unwrap();
        assert!(text.contains("version:"));
        assert!(text.contains("25.07.0-a1b2c3d-rc.42"));
    }

    #[test]
    fn test_append_github_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "existing=1\n").unwrap();

        append_github_output(&path, &report()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing=1\n"));
        assert!(content.contains("version=25.07.0-a1b2c3d-rc.42\n"));
    }

    #[test]
    fn test_render_env_rejects_line_break_in_value() {
        let forged = report_for_commit("abc\ndraft=true");
        let err = render(&forged, OutputFormat::Env).unwrap_err();
        assert!(err.to_string().contains("line break"));

        let carriage = report_for_commit("abc\rdraft=true");
        assert!(render_env(&carriage).is_err());
    }

    #[test]
    fn test_append_github_output_leaves_file_untouched_on_line_break() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let forged = report_for_commit("abc\ndraft=true");
        assert!(append_github_output(&path, &forged).is_err());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing=1\n");
    }
}
