//! The version resolver.
//!
//! Given a branch name, a short commit hash, a build counter and the build
//! date, derive the version string and build type. Pure and stateless: the
//! only failure is an unsupported branch name.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{CalendarStamp, WeekConvention};
use crate::domain::{BuildType, VersionInfo};
use crate::error::Result;

/// Inputs to one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub branch_name: String,
    pub commit_hash: String,
    pub build_id: u64,
    pub date: NaiveDate,
}

/// Output of one resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub version: String,
    pub build_type: BuildType,
    pub info: VersionInfo,
}

/// Resolve a version string and build type.
///
/// # Arguments
/// * `request` - Branch, commit, build id and date
/// * `convention` - How the week number is derived from the date
///
/// # Returns
/// * `Ok(ResolvedVersion)` - The version string and its classification
/// * `Err(ReleaseError::UnsupportedBranch)` - If the branch is not main, develop, bugfix/* or feature/*
///
/// # Example
/// ```ignore
/// let resolved = resolve(&request_for("main", "a1b2c3d", 42, 2025-02-12), WeekConvention::Iso)?;
/// assert_eq!(resolved.version, "25.07.0-42");
/// ```
pub fn resolve(request: &ResolveRequest, convention: WeekConvention) -> Result<ResolvedVersion> {
    let stamp = CalendarStamp::from_date(request.date, convention);
    resolve_with_stamp(
        &request.branch_name,
        &request.commit_hash,
        request.build_id,
        stamp,
    )
}

/// Resolve against an already computed year/week stamp
pub fn resolve_with_stamp(
    branch_name: &str,
    commit_hash: &str,
    build_id: u64,
    stamp: CalendarStamp,
) -> Result<ResolvedVersion> {
    let info = VersionInfo::new(branch_name, commit_hash, build_id, stamp)?;
    let version = info.to_string();

    tracing::debug!(
        branch = branch_name,
        build_type = %info.build_type,
        version = %version,
        "resolved version"
    );

    Ok(ResolvedVersion {
        version,
        build_type: info.build_type,
        info,
    })
}
