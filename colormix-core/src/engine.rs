use colormix_model::{Color, ColorEntry};
use tracing::{debug, warn};

use crate::error::{MixError, Result};
use crate::mix::mix_colors;

/// Ordered list of picked colors and their mix.
///
/// The mix is rebuilt from the whole list after every mutation and is
/// `None` exactly when the list is empty. All mutations take `&mut self`,
/// so callers never observe entries and mix out of step.
#[derive(Debug, Clone, Default)]
pub struct ColorMixEngine {
    entries: Vec<ColorEntry>,
    mix: Option<Color>,
}

impl ColorMixEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `color` under `label`.
    ///
    /// Fails with [`MixError::InvalidColor`] if any channel is outside
    /// `[0.0, 1.0]`; nothing is stored in that case.
    pub fn add_color(
        &mut self,
        color: Color,
        label: impl Into<String>,
    ) -> Result<()> {
        if let Err(err) = color.validate() {
            warn!(%err, "rejected color");
            return Err(err.into());
        }

        self.entries.push(ColorEntry::new(color, label));
        self.recompute();
        debug!(
            count = self.entries.len(),
            color = %color,
            "added color"
        );
        Ok(())
    }

    /// Remove and return the entry at `index` (insertion order, 0-based).
    pub fn remove_color(&mut self, index: usize) -> Result<ColorEntry> {
        self.check_index(index)?;

        let removed = self.entries.remove(index);
        self.recompute();
        debug!(index, count = self.entries.len(), "removed color");
        Ok(removed)
    }

    /// Drop every entry; the engine returns to the empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.mix = None;
        debug!("cleared colors");
    }

    /// The current mix, or `None` while no colors are selected.
    pub fn current_mix(&self) -> Option<Color> {
        self.mix
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_at(&self, index: usize) -> Result<&ColorEntry> {
        self.check_index(index)?;
        Ok(&self.entries[index])
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.entries.len();
        if index >= len {
            warn!(index, len, "entry index out of range");
            return Err(MixError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.mix = mix_colors(self.entries.iter().map(|entry| &entry.color));
    }
}
