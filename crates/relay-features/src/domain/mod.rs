mod flag;
pub use flag::Flag;

mod constants;
pub use constants::{TAG_NO_FAKE_TCP, TAG_WITH_GVISOR, TAG_WITH_LOW_MEMORY};

/// Ordered list of tags for the capabilities enabled in a build.
pub type Tags = Vec<&'static str>;
