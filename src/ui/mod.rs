//! User interface module - terminal output.
//!
//! `formatter` holds the styled message helpers; this module adds the
//! summaries printed by the commands.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, display_table,
};

use crate::domain::ParsedVersion;
use crate::output::ResolutionReport;

/// Print a human summary of a resolution
pub fn display_resolution(report: &ResolutionReport) {
    display_table(
        "Resolved version",
        &[
            ("Version", report.version.clone()),
            ("Build type", report.build_type.to_string()),
            ("Branch", report.branch.clone()),
            ("Executable", report.executable.clone()),
            ("Installer", report.installer.clone()),
            ("Tag", report.tag.clone()),
            ("Release", release_kind(report.draft, report.prerelease).to_string()),
        ],
    );
}

/// Print the components of a parsed version
pub fn display_parsed(input: &str, parsed: &ParsedVersion) {
    display_table(
        &format!("Version '{}'", input),
        &[
            ("Year", format!("{:02}", parsed.year)),
            ("Week", format!("{:02}", parsed.week)),
            ("Sequence", parsed.sequence.to_string()),
            (
                "Commit",
                parsed.commit_hash.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("Build", parsed.build_id.to_string()),
            ("Build type", parsed.build_type.to_string()),
        ],
    );
}

/// Short label for the publication flags
pub fn release_kind(draft: bool, prerelease: bool) -> &'static str {
    match (draft, prerelease) {
        (true, _) => "draft",
        (false, true) => "prerelease",
        (false, false) => "published",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_kind() {
        assert_eq!(release_kind(false, false), "published");
        assert_eq!(release_kind(false, true), "prerelease");
        assert_eq!(release_kind(true, true), "draft");
    }
}
