//! Data model shared across the colormix crates: normalized RGBA colors, the
//! labelled entries a user picks, and the display language.
#![allow(missing_docs)]

pub mod color;
pub mod entry;
pub mod error;
pub mod language;

pub use color::{Channel, Color};
pub use entry::ColorEntry;
pub use error::{ColorParseError, InvalidColorError};
pub use language::{Language, UnknownLanguage};
