//! Stable tag strings reported for enabled capabilities.
//!
//! Consumers (version banners, diagnostics) print these verbatim, so the
//! values must not change between releases.

/// Reported when the engine runs in reduced-memory mode.
pub const TAG_WITH_LOW_MEMORY: &str = "with_low_memory";

/// Reported when the fake-TCP interception path is compiled out.
pub const TAG_NO_FAKE_TCP: &str = "no_fake_tcp";

/// Reported when the gVisor-based user-space netstack is compiled in.
pub const TAG_WITH_GVISOR: &str = "with_gvisor";
