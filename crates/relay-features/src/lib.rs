//! Build capability reporting for the relay engine.
//!
//! The engine can be compiled with optional capabilities switched on or off
//! through Cargo features. [`compute_tags`] reports which of them made it into
//! the current build as an ordered list of stable tag strings.
//!
//! ```
//! use relay_features::{BuildFeatures, Feature};
//!
//! let features = BuildFeatures::none().with(Feature::GVisor, true);
//! assert_eq!(features.compute_tags(), ["with_gvisor"]);
//! ```
mod domain;
pub use domain::{Flag, Tags};
pub use domain::{TAG_NO_FAKE_TCP, TAG_WITH_GVISOR, TAG_WITH_LOW_MEMORY};

mod error;
pub use error::{FeatureError, FeatureResult};

mod kind;
pub use kind::Feature;

mod build;
pub use build::{BuildFeatures, BuildInfo, compute_tags};
