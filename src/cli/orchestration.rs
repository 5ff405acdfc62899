//! Workflow orchestration for the three commands.
//!
//! Argument parsing lives in main.rs; the functions here take plain structs
//! so they can be driven from tests without clap or a real repository.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::calendar::{year_boundary_mismatch, CalendarStamp};
use crate::config::Config;
use crate::domain::ParsedVersion;
use crate::error::{ReleaseError, Result};
use crate::git::{short_hash, Repository};
use crate::naming::{locate_executable, NamingScheme, Platform};
use crate::output::ResolutionReport;
use crate::release::ReleasePlan;
use crate::resolver::{resolve, ResolveRequest};

/// Arguments for the resolve workflow
///
/// Every input is optional here; missing branch and commit are read from the
/// repository, a missing date means today.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveArgs {
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub build_id: Option<u64>,
    pub date: Option<NaiveDate>,
    pub platform: Option<Platform>,
    pub postfix: Option<String>,
}

impl ResolveArgs {
    /// Whether the repository has to be consulted
    pub fn needs_repository(&self) -> bool {
        self.branch.is_none() || self.commit.is_none()
    }
}

/// Arguments for the locate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct LocateArgs {
    pub dir: PathBuf,
    pub version: String,
    pub platform: Option<Platform>,
    pub postfix: Option<String>,
}

/// Resolve the version and every name derived from it.
///
/// # Arguments
/// * `args` - Inputs given on the command line or by the CI environment
/// * `config` - Loaded configuration
/// * `repo` - Local repository, consulted only for missing branch or commit
/// * `today` - Date used when `args.date` is not set
/// * `warnings` - Receives non-fatal warnings, also when an error is returned
///
/// # Returns
/// * `Ok(ResolutionReport)` - Version, artifact names and release metadata
/// * `Err` - Unsupported branch, missing build id, or undiscoverable inputs
pub fn run_resolve(
    args: &ResolveArgs,
    config: &Config,
    repo: Option<&dyn Repository>,
    today: NaiveDate,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<ResolutionReport> {
    let build_id = args.build_id.ok_or_else(|| {
        ReleaseError::input("A build id is required (--build-id or GITHUB_RUN_NUMBER)")
    })?;

    let branch_name = match &args.branch {
        Some(branch) => branch.clone(),
        None => discover_branch(repo, warnings)?,
    };

    let commit_hash = match &args.commit {
        Some(commit) => commit.clone(),
        None => {
            let repo = repo.ok_or_else(|| {
                ReleaseError::input("No commit given and no git repository found")
            })?;
            let full = repo.head_commit_id()?;
            let short = short_hash(&full, config.naming.short_hash_length);
            tracing::info!(commit = %short, "using HEAD commit from repository");
            short
        }
    };

    let date = args.date.unwrap_or(today);
    let convention = config.calendar.week_convention;
    if year_boundary_mismatch(date) {
        warnings.push(BoundaryWarning::YearBoundary {
            date: date.to_string(),
            convention: convention.to_string(),
            stamp: CalendarStamp::from_date(date, convention).to_string(),
        });
    }

    let request = ResolveRequest {
        branch_name,
        commit_hash,
        build_id,
        date,
    };
    let resolved = resolve(&request, convention)?;

    let platform = args.platform.unwrap_or_else(Platform::host);
    let postfix = args
        .postfix
        .as_deref()
        .or(config.naming.installer_postfix.as_deref());
    let names =
        NamingScheme::from_config(config).artifact_names(&resolved.version, platform, postfix);
    let plan = ReleasePlan::from_resolved(&resolved, config);

    Ok(ResolutionReport::new(&resolved, &names, &plan, platform))
}

fn discover_branch(
    repo: Option<&dyn Repository>,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<String> {
    let repo =
        repo.ok_or_else(|| ReleaseError::input("No branch given and no git repository found"))?;

    match repo.current_branch()? {
        Some(branch) => {
            tracing::info!(branch = %branch, "using checked-out branch");
            Ok(branch)
        }
        None => {
            let commit_hash = repo.head_commit_id().unwrap_or_default();
            warnings.push(BoundaryWarning::DetachedHead { commit_hash });
            Err(ReleaseError::input(
                "Cannot determine the branch of a detached HEAD",
            ))
        }
    }
}

/// Parse a version string or tag into its components
pub fn run_parse(input: &str) -> Result<ParsedVersion> {
    ParsedVersion::parse(input.trim())
}

/// Find the executable for a version in a build output directory
pub fn run_locate(args: &LocateArgs, config: &Config) -> Result<PathBuf> {
    let scheme = NamingScheme::from_config(config);
    let platform = args.platform.unwrap_or_else(Platform::host);
    let postfix = args
        .postfix
        .as_deref()
        .or(config.naming.installer_postfix.as_deref());
    let names = scheme.artifact_names(&args.version, platform, postfix);

    locate_executable(Path::new(&args.dir), &names, &scheme)
}
