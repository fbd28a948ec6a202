mod features;
pub use features::{BuildFeatures, compute_tags};

mod info;
pub use info::BuildInfo;
