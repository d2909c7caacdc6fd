use std::path::PathBuf;

use colormix_core::LabelFormat;
use colormix_model::Language;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "warn";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Settings for a mixer session.
///
/// Every field is optional in files; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MixerConfig {
    /// Language the screen starts in. Russian unless configured.
    pub language: Language,
    /// How picked colors and the mix are labelled.
    pub label_format: LabelFormat,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is
    /// not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            label_format: LabelFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}
