mod feature;
pub use feature::Feature;
