use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    #[error("unknown feature tag: {0}")]
    UnknownTag(String),
}

pub type FeatureResult<T> = Result<T, FeatureError>;
