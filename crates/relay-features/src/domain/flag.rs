use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Boolean capability indicator with explicit enable/disable semantics.
///
/// Capabilities are opt-in, so the default is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Flag(bool);

impl Flag {
    /// Create an enabled flag.
    pub const fn enabled() -> Self {
        Self(true)
    }

    /// Create a disabled flag.
    pub const fn disabled() -> Self {
        Self(false)
    }

    /// Create a flag from a raw boolean in const context.
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Check if the flag is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.0
    }

    /// Check if the flag is disabled.
    pub const fn is_disabled(&self) -> bool {
        !self.0
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

impl From<Flag> for bool {
    fn from(f: Flag) -> Self {
        f.0
    }
}

#[cfg(test)]
mod tests {
    use super::Flag;

    #[test]
    fn default_is_disabled() {
        let f = Flag::default();
        assert!(f.is_disabled());
        assert!(!f.is_enabled());
    }

    #[test]
    fn enabled_and_disabled_constructors_work() {
        let e = Flag::enabled();
        let d = Flag::disabled();

        assert!(e.is_enabled());
        assert!(!e.is_disabled());

        assert!(!d.is_enabled());
        assert!(d.is_disabled());

        assert_eq!(Flag::new(true), e);
        assert_eq!(Flag::new(false), d);
    }

    #[test]
    fn from_bool_and_into_bool() {
        let f_true: Flag = true.into();
        let f_false: Flag = false.into();

        assert!(f_true.is_enabled());
        assert!(f_false.is_disabled());

        let b1: bool = f_true.into();
        let b2: bool = f_false.into();

        assert!(b1);
        assert!(!b2);
    }

    #[test]
    fn serializes_as_plain_bool() {
        let json = serde_json::to_string(&Flag::enabled()).unwrap();
        assert_eq!(json, "true");

        let back: Flag = serde_json::from_str("false").unwrap();
        assert!(back.is_disabled());
    }
}
