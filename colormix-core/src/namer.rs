use std::fmt;

use colormix_model::Color;
use serde::{Deserialize, Serialize};

/// Produces the display label for a color.
///
/// Stands in for the platform color-naming facility; implementations only
/// format channel values and make no attempt at human color names.
pub trait ColorNamer: fmt::Debug {
    fn name(&self, color: &Color) -> String;
}

/// `#RRGGBBAA`
#[derive(Debug, Clone, Copy, Default)]
pub struct HexNamer;

impl ColorNamer for HexNamer {
    fn name(&self, color: &Color) -> String {
        color.to_hex()
    }
}

/// `R 100% G 0% B 0% A 100%`
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentNamer;

impl ColorNamer for PercentNamer {
    fn name(&self, color: &Color) -> String {
        let pct = |v: f64| (v * 100.0).round() as u8;
        format!(
            "R {}% G {}% B {}% A {}%",
            pct(color.red),
            pct(color.green),
            pct(color.blue),
            pct(color.alpha)
        )
    }
}

/// Which built-in [`ColorNamer`] labels picked colors and the mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    #[default]
    Hex,
    Percent,
}

impl LabelFormat {
    pub fn namer(&self) -> Box<dyn ColorNamer> {
        match self {
            LabelFormat::Hex => Box::new(HexNamer),
            LabelFormat::Percent => Box::new(PercentNamer),
        }
    }
}

impl std::str::FromStr for LabelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(LabelFormat::Hex),
            "percent" => Ok(LabelFormat::Percent),
            other => Err(format!(
                "unknown label format '{other}' (expected hex or percent)"
            )),
        }
    }
}
