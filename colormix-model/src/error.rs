use thiserror::Error;

use crate::color::Channel;

/// A channel value fell outside `[0.0, 1.0]` (NaN included).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{channel} channel out of range: {value} (expected 0.0..=1.0)")]
pub struct InvalidColorError {
    pub channel: Channel,
    pub value: f64,
}

/// Errors produced while parsing a color from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color '{0}' (expected #RGB, #RRGGBB or #RRGGBBAA)")]
    InvalidHex(String),

    #[error("invalid channel list '{0}' (expected r,g,b or r,g,b,a)")]
    InvalidComponents(String),

    #[error(transparent)]
    OutOfRange(#[from] InvalidColorError),
}
