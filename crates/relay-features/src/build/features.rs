use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{Feature, Flag, Tags};

/// Snapshot of the optional capabilities present in a build.
///
/// Built once at startup (normally via [`BuildFeatures::compiled`]) and passed
/// to whoever needs to report or branch on capabilities. Tests can construct
/// any combination directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct BuildFeatures {
    /// `low-memory-mode`
    pub low_memory: Flag,
    /// `fake-tcp-disabled`
    pub no_fake_tcp: Flag,
    /// `isolated-netstack-enabled`
    pub gvisor: Flag,
}

impl BuildFeatures {
    /// Capabilities selected by the Cargo features of this crate.
    pub const fn compiled() -> Self {
        Self {
            low_memory: Flag::new(cfg!(feature = "with_low_memory")),
            no_fake_tcp: Flag::new(cfg!(feature = "no_fake_tcp")),
            gvisor: Flag::new(cfg!(feature = "with_gvisor")),
        }
    }

    /// Every capability disabled.
    pub const fn none() -> Self {
        Self {
            low_memory: Flag::disabled(),
            no_fake_tcp: Flag::disabled(),
            gvisor: Flag::disabled(),
        }
    }

    /// Every capability enabled.
    pub const fn all() -> Self {
        Self {
            low_memory: Flag::enabled(),
            no_fake_tcp: Flag::enabled(),
            gvisor: Flag::enabled(),
        }
    }

    /// Returns a copy with `feature` set to `on`.
    pub const fn with(mut self, feature: Feature, on: bool) -> Self {
        let flag = Flag::new(on);
        match feature {
            Feature::LowMemory => self.low_memory = flag,
            Feature::NoFakeTcp => self.no_fake_tcp = flag,
            Feature::GVisor => self.gvisor = flag,
        }
        self
    }

    /// Indicator value for `feature`.
    pub const fn get(&self, feature: Feature) -> Flag {
        match feature {
            Feature::LowMemory => self.low_memory,
            Feature::NoFakeTcp => self.no_fake_tcp,
            Feature::GVisor => self.gvisor,
        }
    }

    /// Enabled capabilities in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_enabled())
    }

    /// Tags of the enabled capabilities in declaration order.
    ///
    /// Recomputed on every call; the result is empty iff nothing is enabled.
    pub fn compute_tags(&self) -> Tags {
        self.enabled().map(Feature::tag).collect()
    }
}

/// Tags of the capabilities compiled into this build.
pub fn compute_tags() -> Tags {
    BuildFeatures::compiled().compute_tags()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(low_memory: bool, no_fake_tcp: bool, gvisor: bool) -> BuildFeatures {
        BuildFeatures {
            low_memory: low_memory.into(),
            no_fake_tcp: no_fake_tcp.into(),
            gvisor: gvisor.into(),
        }
    }

    #[test]
    fn nothing_enabled_yields_empty_list() {
        assert!(config(false, false, false).compute_tags().is_empty());
        assert!(BuildFeatures::none().compute_tags().is_empty());
        assert!(BuildFeatures::default().compute_tags().is_empty());
    }

    #[test]
    fn only_low_memory() {
        assert_eq!(
            config(true, false, false).compute_tags(),
            ["with_low_memory"]
        );
    }

    #[test]
    fn skipped_indicator_is_omitted_and_order_is_kept() {
        assert_eq!(
            config(false, true, true).compute_tags(),
            ["no_fake_tcp", "with_gvisor"]
        );
    }

    #[test]
    fn everything_enabled_in_declaration_order() {
        let expected = ["with_low_memory", "no_fake_tcp", "with_gvisor"];
        assert_eq!(config(true, true, true).compute_tags(), expected);
        assert_eq!(BuildFeatures::all().compute_tags(), expected);
    }

    #[test]
    fn length_matches_enabled_count_for_every_configuration() {
        for bits in 0u8..8 {
            let cfg = config(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let tags = cfg.compute_tags();

            assert_eq!(tags.len(), bits.count_ones() as usize, "bits={bits:03b}");
            for tag in &tags {
                let feature = Feature::from_tag(tag).unwrap();
                assert!(cfg.get(feature).is_enabled(), "{tag} reported but disabled");
            }

            let mut sorted = tags.clone();
            sorted.sort_by_key(|t| Feature::from_tag(t).unwrap());
            assert_eq!(tags, sorted, "declaration order broken for bits={bits:03b}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cfg = config(true, false, true);
        let first = cfg.compute_tags();
        for _ in 0..16 {
            assert_eq!(cfg.compute_tags(), first);
        }
    }

    #[test]
    fn concurrent_callers_see_the_same_tags() {
        let cfg = BuildFeatures::all();
        let expected = cfg.compute_tags();

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || cfg.compute_tags()))
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }

    #[test]
    fn with_and_get_agree() {
        let cfg = BuildFeatures::none()
            .with(Feature::GVisor, true)
            .with(Feature::LowMemory, true)
            .with(Feature::LowMemory, false);

        assert!(cfg.get(Feature::GVisor).is_enabled());
        assert!(cfg.get(Feature::LowMemory).is_disabled());
        assert!(cfg.get(Feature::NoFakeTcp).is_disabled());
        assert_eq!(cfg.enabled().collect::<Vec<_>>(), [Feature::GVisor]);
    }

    #[test]
    fn compiled_reflects_cargo_features() {
        let cfg = BuildFeatures::compiled();
        assert_eq!(cfg.low_memory.is_enabled(), cfg!(feature = "with_low_memory"));
        assert_eq!(cfg.no_fake_tcp.is_enabled(), cfg!(feature = "no_fake_tcp"));
        assert_eq!(cfg.gvisor.is_enabled(), cfg!(feature = "with_gvisor"));
        assert_eq!(compute_tags(), cfg.compute_tags());
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: BuildFeatures = serde_json::from_str(r#"{"gvisor": true}"#).unwrap();
        assert_eq!(cfg, BuildFeatures::none().with(Feature::GVisor, true));
    }
}
