use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    domain::{TAG_NO_FAKE_TCP, TAG_WITH_GVISOR, TAG_WITH_LOW_MEMORY},
    error::{FeatureError, FeatureResult},
};

/// Optional engine capability that can be compiled in or out.
///
/// Variant order is the declaration order used for tag reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Reduced-memory operating mode.
    LowMemory,
    /// Fake-TCP interception path compiled out.
    NoFakeTcp,
    /// User-space netstack on an isolated virtual NIC.
    #[serde(rename = "gvisor")]
    GVisor,
}

impl Feature {
    /// All known capabilities in declaration order.
    pub const ALL: [Feature; 3] = [Feature::LowMemory, Feature::NoFakeTcp, Feature::GVisor];

    /// Stable tag reported when this capability is enabled.
    pub const fn tag(self) -> &'static str {
        match self {
            Feature::LowMemory => TAG_WITH_LOW_MEMORY,
            Feature::NoFakeTcp => TAG_NO_FAKE_TCP,
            Feature::GVisor => TAG_WITH_GVISOR,
        }
    }

    /// Indicator name of the capability.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::LowMemory => "low-memory-mode",
            Feature::NoFakeTcp => "fake-tcp-disabled",
            Feature::GVisor => "isolated-netstack-enabled",
        }
    }

    /// Resolve a capability from its reported tag.
    pub fn from_tag(tag: &str) -> FeatureResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.tag() == tag)
            .ok_or_else(|| FeatureError::UnknownTag(tag.to_string()))
    }
}

impl FromStr for Feature {
    type Err = FeatureError;
    fn from_str(s: &str) -> FeatureResult<Self> {
        Self::from_tag(&s.trim().to_ascii_lowercase())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
