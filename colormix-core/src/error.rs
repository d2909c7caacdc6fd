use colormix_model::InvalidColorError;
use thiserror::Error;

/// Caller-contract violations reported by [`ColorMixEngine`].
///
/// Every variant is raised before any state changes, so the engine is left
/// exactly as it was.
///
/// [`ColorMixEngine`]: crate::ColorMixEngine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    #[error("invalid color: {0}")]
    InvalidColor(#[from] InvalidColorError),

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MixError>;
