//! Locating, parsing and overriding [`MixerConfig`].
//!
//! Evaluation order:
//! 1) an explicit path (the CLI `--config` flag),
//! 2) `$COLORMIX_CONFIG_PATH` (TOML or JSON file),
//! 3) `$COLORMIX_CONFIG_JSON` (inline JSON),
//! 4) `colormix.toml` / `config/colormix.toml` under the search root,
//! 5) defaults.
//!
//! `$COLORMIX_LANG`, `$COLORMIX_LABEL_FORMAT` and `$COLORMIX_LOG` are then
//! applied on top of whichever source won.

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use colormix_core::LabelFormat;
use colormix_model::Language;
use tracing::debug;

use crate::models::{ConfigSource, MixerConfig};
use crate::util::non_empty_var;
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "COLORMIX_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "COLORMIX_CONFIG_JSON";
pub const LANG_VAR: &str = "COLORMIX_LANG";
pub const LABEL_FORMAT_VAR: &str = "COLORMIX_LABEL_FORMAT";
pub const LOG_VAR: &str = "COLORMIX_LOG";

const DEFAULT_FILES: &[&str] = &["colormix.toml", "config/colormix.toml"];

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: MixerConfig,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_root: PathBuf,
    vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Loader over a snapshot of the process environment, searching the
    /// current directory for default files.
    pub fn from_env() -> Self {
        Self {
            explicit_path: None,
            search_root: PathBuf::from("."),
            vars: std::env::vars().collect(),
        }
    }

    /// Loader that sees no environment at all.
    pub fn isolated(search_root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: search_root.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    pub fn with_var(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_base()?;
        self.apply_overrides(&mut config)?;
        debug!(?source, ?config, "loaded mixer config");
        Ok(ConfigLoad { config, source })
    }

    fn load_base(
        &self,
    ) -> Result<(MixerConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.explicit_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(raw) = non_empty_var(&self.vars, CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(&self.vars, CONFIG_JSON_VAR) {
            let config = parse_json(raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((MixerConfig::default(), ConfigSource::Default))
    }

    fn apply_overrides(
        &self,
        config: &mut MixerConfig,
    ) -> Result<(), ConfigLoadError> {
        if let Some(raw) = non_empty_var(&self.vars, LANG_VAR) {
            config.language = raw.parse::<Language>().map_err(|err| {
                ConfigLoadError::InvalidOverride {
                    key: LANG_VAR,
                    value: raw.to_string(),
                    reason: err.to_string(),
                }
            })?;
        }

        if let Some(raw) = non_empty_var(&self.vars, LABEL_FORMAT_VAR) {
            config.label_format =
                raw.parse::<LabelFormat>().map_err(|reason| {
                    ConfigLoadError::InvalidOverride {
                        key: LABEL_FORMAT_VAR,
                        value: raw.to_string(),
                        reason,
                    }
                })?;
        }

        if let Some(raw) = non_empty_var(&self.vars, LOG_VAR) {
            config.log_filter = raw.to_string();
        }

        Ok(())
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> Result<MixerConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                source: anyhow!(err),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<MixerConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                source: anyhow!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<MixerConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        source: anyhow!(err),
    })
}

/// Load `.env` (or `path`) into the process environment. A missing file is
/// not an error.
pub fn load_env_file(
    path: Option<&Path>,
) -> Result<Option<PathBuf>, ConfigLoadError> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}
