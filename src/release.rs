//! Release metadata for the hosting platform's release page.

use serde::Serialize;

use crate::config::Config;
use crate::domain::BuildType;
use crate::naming::NamingScheme;
use crate::resolver::ResolvedVersion;

/// Tag, title and publication flags for one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    pub tag: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl ReleasePlan {
    /// Derive the release metadata for a resolved version.
    ///
    /// Stable builds are published as full releases, release candidates as
    /// prereleases, and dev builds as draft prereleases.
    pub fn from_resolved(resolved: &ResolvedVersion, config: &Config) -> Self {
        let scheme = NamingScheme::from_config(config);
        let tag = scheme.tag_name(&resolved.version);
        let title = format!("{} {}", config.product.display_name, tag);

        let info = &resolved.info;
        let mut body = format!(
            "Version: {}\nBuild type: {}\nBranch: {}\n",
            resolved.version, resolved.build_type, info.branch_name
        );
        if info.kind().embeds_commit() {
            body.push_str(&format!("Commit: {}\n", info.commit_hash));
        }
        body.push_str(&format!("Build: {}\n", info.build_id));

        ReleasePlan {
            tag,
            title,
            body,
            draft: resolved.build_type == BuildType::Dev,
            prerelease: resolved.build_type != BuildType::Stable,
        }
    }
}
