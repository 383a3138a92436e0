// Column options module
// Static per-column-day configuration, set once when the column is created

use serde::{Deserialize, Serialize};

/// Which markup template the column renders with.
///
/// There is exactly one behavioral variant, so this is a construction-time
/// choice rather than a subclass hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridVariant {
    /// One flat run of event blocks.
    #[default]
    Normal,
    /// Each matrix row wrapped in its own row element.
    Split,
}

/// Static configuration for one day column of the week view.
///
/// Immutable after construction; a new column is built when any of these
/// change (e.g. day navigation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOptions {
    /// Position of this column within the week strip.
    pub index: usize,
    /// Column width as a percentage of the full grid.
    pub width: f64,
    /// 8-digit date key, `YYYYMMDD` with no separators.
    pub ymd: String,
    #[serde(default)]
    pub is_today: bool,
    /// First visible hour, 0-23.
    pub hour_start: u32,
    /// Hour the visible window ends at, 1-24 (exclusive).
    pub hour_end: u32,
    /// Fixed visual gutter subtracted from every block height, in pixels.
    #[serde(default = "default_margin_bottom")]
    pub default_margin_bottom: f64,
    /// Smallest block height before the gutter is subtracted, in pixels.
    #[serde(default = "default_min_height")]
    pub min_height: f64,
    #[serde(default)]
    pub grid: GridVariant,
}

fn default_margin_bottom() -> f64 {
    2.0
}

fn default_min_height() -> f64 {
    18.5
}

impl ColumnOptions {
    /// Millisecond span of the visible hour window.
    pub fn base_ms(&self) -> f64 {
        (self.hour_end as f64 - self.hour_start as f64) * 3_600_000.0
    }

    /// Left offset of the column within the grid, as a percentage.
    pub fn left(&self) -> f64 {
        self.index as f64 * self.width
    }
}
