//! Configuration for colormix sessions.
//!
//! A [`MixerConfig`] picks the starting language, the label format for
//! picked colors and the default log filter. [`ConfigLoader`] resolves it
//! from an explicit file, environment variables or well-known file names,
//! then applies per-field environment overrides.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{ConfigSource, DEFAULT_LOG_FILTER, MixerConfig};
