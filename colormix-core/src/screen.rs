//! Presentation model of the mixer screen.
//!
//! The screen shows one result row followed by one row per picked color, an
//! "add color" button and a language toggle. [`MixerScreen`] owns the engine
//! and turns its state into those rows and their localized text; the actual
//! widget layer only renders what it is handed.

use colormix_model::{Color, ColorEntry, Language};
use rust_i18n::t;
use tracing::debug;

use crate::engine::ColorMixEngine;
use crate::error::Result;
use crate::namer::{ColorNamer, HexNamer};

/// One rendered line of the color list.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRow {
    pub text: String,
    /// Swatch color; `None` for the result row while nothing is selected.
    pub color: Option<Color>,
    pub is_result: bool,
}

#[derive(Debug)]
pub struct MixerScreen {
    engine: ColorMixEngine,
    language: Language,
    namer: Box<dyn ColorNamer>,
}

impl Default for MixerScreen {
    fn default() -> Self {
        Self::new(Language::default(), Box::new(HexNamer))
    }
}

impl MixerScreen {
    pub fn new(language: Language, namer: Box<dyn ColorNamer>) -> Self {
        Self {
            engine: ColorMixEngine::new(),
            language,
            namer,
        }
    }

    pub fn engine(&self) -> &ColorMixEngine {
        &self.engine
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(from = %self.language, to = %language, "switching language");
        self.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    /// Confirmed pick from the color picker: label it and add it.
    pub fn pick_color(&mut self, color: Color) -> Result<()> {
        let label = self.namer.name(&color);
        self.engine.add_color(color, label)
    }

    pub fn add_labeled(
        &mut self,
        color: Color,
        label: impl Into<String>,
    ) -> Result<()> {
        self.engine.add_color(color, label)
    }

    /// Delete the `index`-th color row (the result row is not counted).
    pub fn delete_row(&mut self, index: usize) -> Result<ColorEntry> {
        self.engine.remove_color(index)
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn add_button_title(&self) -> String {
        t!("mixer.add_color", locale = self.language.code()).into_owned()
    }

    /// Caption of the toggle: the language it switches to.
    pub fn language_button_title(&self) -> String {
        let target = self.language.toggled();
        t!("mixer.language_button", locale = target.code()).into_owned()
    }

    pub fn result_text(&self) -> String {
        let locale = self.language.code();
        match self.engine.current_mix() {
            Some(mix) => {
                let name = self.namer.name(&mix);
                t!("mixer.result", locale = locale, name = name).into_owned()
            }
            None => t!("mixer.empty", locale = locale).into_owned(),
        }
    }

    /// Result row first, then the picked colors in insertion order.
    pub fn rows(&self) -> Vec<ColorRow> {
        let mut rows = Vec::with_capacity(self.engine.entry_count() + 1);
        rows.push(ColorRow {
            text: self.result_text(),
            color: self.engine.current_mix(),
            is_result: true,
        });
        rows.extend(self.engine.entries().iter().map(|entry| ColorRow {
            text: entry.label.clone(),
            color: Some(entry.color),
            is_result: false,
        }));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MixError;
    use crate::namer::PercentNamer;

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0).unwrap()
    }

    fn blue() -> Color {
        Color::new(0.0, 0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn empty_screen_prompts_for_colors() {
        let screen = MixerScreen::default();
        assert_eq!(screen.language(), Language::Russian);
        assert_eq!(screen.result_text(), "Добавьте цвета для смешивания");

        let rows = screen.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_result);
        assert_eq!(rows[0].color, None);
    }

    #[test]
    fn rows_list_result_then_entries() {
        let mut screen = MixerScreen::new(Language::English, Box::new(HexNamer));
        screen.pick_color(red()).unwrap();
        screen.add_labeled(blue(), "sky").unwrap();

        let rows = screen.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text, "Result: #800080FF");
        assert_eq!(rows[0].color, Color::new(0.5, 0.0, 0.5, 1.0).ok());
        assert_eq!(rows[1].text, "#FF0000FF");
        assert!(!rows[1].is_result);
        assert_eq!(rows[2].text, "sky");
        assert_eq!(rows[2].color, Some(blue()));
    }

    #[test]
    fn language_toggle_relocalizes_text() {
        let mut screen = MixerScreen::default();
        screen.pick_color(red()).unwrap();

        assert_eq!(screen.add_button_title(), "Добавить цвет");
        assert_eq!(screen.language_button_title(), "EN");
        assert_eq!(screen.result_text(), "Результат: #FF0000FF");

        assert_eq!(screen.toggle_language(), Language::English);
        assert_eq!(screen.add_button_title(), "Add color");
        assert_eq!(screen.language_button_title(), "RU");
        assert_eq!(screen.result_text(), "Result: #FF0000FF");
    }

    #[test]
    fn namer_labels_picks_and_result() {
        let mut screen =
            MixerScreen::new(Language::English, Box::new(PercentNamer));
        screen.pick_color(red()).unwrap();
        screen.pick_color(blue()).unwrap();
        assert_eq!(screen.result_text(), "Result: R 50% G 0% B 50% A 100%");
        assert_eq!(screen.rows()[1].text, "R 100% G 0% B 0% A 100%");
    }

    #[test]
    fn deleting_last_row_restores_prompt() {
        let mut screen = MixerScreen::new(Language::English, Box::new(HexNamer));
        screen.pick_color(red()).unwrap();
        let removed = screen.delete_row(0).unwrap();
        assert_eq!(removed.color, red());
        assert_eq!(screen.result_text(), "Add colors to mix");
        assert!(matches!(
            screen.delete_row(0),
            Err(MixError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
