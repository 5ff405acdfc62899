//! Domain logic - pure versioning rules independent of git and the host

pub mod branch;
pub mod build_type;
pub mod version;

pub use branch::BranchKind;
pub use build_type::BuildType;
pub use version::{ParsedVersion, VersionInfo};
