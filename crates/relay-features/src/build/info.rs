use serde::Serialize;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{BuildFeatures, Tags};

/// Version banner data for a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BuildInfo {
    pub name: String,
    pub version: String,
    pub os: &'static str,
    pub arch: &'static str,
    pub tags: Tags,
}

impl BuildInfo {
    /// Collects banner data for the host platform and the given capabilities.
    pub fn new(name: impl Into<String>, version: impl Into<String>, features: &BuildFeatures) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            tags: features.compute_tags(),
        }
    }

    /// Comma-separated tag list, empty when no capability is enabled.
    pub fn tags_line(&self) -> String {
        self.tags.join(",")
    }

    /// Human-readable banner.
    ///
    /// The second `Use tags:` line is only present when at least one
    /// capability is enabled.
    pub fn banner(&self) -> String {
        let mut out = format!("{} {} {} {}", self.name, self.version, self.os, self.arch);
        if !self.tags.is_empty() {
            out.push_str("\nUse tags: ");
            out.push_str(&self.tags.join(", "));
        }
        out
    }
}
