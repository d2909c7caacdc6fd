use crate::color::Color;

/// A selected color together with the display label it was added with.
///
/// The label is opaque: it is stored and handed back verbatim and may be
/// empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    pub color: Color,
    pub label: String,
}

impl ColorEntry {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}
