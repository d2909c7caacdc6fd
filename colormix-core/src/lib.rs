//! # colormix core
//!
//! Keeps the list of colors a user has picked and their per-channel average
//! ("the mix"), plus the localized presentation model of the mixer screen.
//!
//! ## Overview
//!
//! - [`ColorMixEngine`]: ordered entries and the mix, rebuilt from scratch on
//!   every add/remove so rounding never accumulates across edits
//! - [`mix_colors`]: the averaging step on its own
//! - [`MixerScreen`]: result row + color rows, Russian/English text
//! - [`ColorNamer`]: labelling seam for picked colors and the mix
//!
//! ## Examples
//!
//! ```
//! use colormix_core::{ColorMixEngine, MixError};
//! use colormix_model::Color;
//!
//! let mut engine = ColorMixEngine::new();
//! assert_eq!(engine.current_mix(), None);
//!
//! engine.add_color(Color::rgb(1.0, 0.0, 0.0)?, "red")?;
//! engine.add_color(Color::rgb(0.0, 0.0, 1.0)?, "blue")?;
//! assert_eq!(engine.current_mix(), Some(Color::rgb(0.5, 0.0, 0.5)?));
//!
//! assert!(matches!(
//!     engine.remove_color(5),
//!     Err(MixError::IndexOutOfRange { index: 5, len: 2 })
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![allow(missing_docs)]

rust_i18n::i18n!("locales", fallback = "en");

pub mod engine;
pub mod error;
pub mod mix;
pub mod namer;
pub mod screen;

pub use engine::ColorMixEngine;
pub use error::{MixError, Result as MixResult};
pub use mix::mix_colors;
pub use namer::{ColorNamer, HexNamer, LabelFormat, PercentNamer};
pub use screen::{ColorRow, MixerScreen};
