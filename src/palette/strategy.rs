use std::collections::HashMap;

use crate::{
    foundation::{core::Rgba8, error::AlluvialResult},
    palette::hsl::hsl_to_rgba8,
    table::datum::Datum,
};

/// Everything a palette may key a colour on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StratumKey<'a> {
    /// Position of the group on the x-axis.
    pub group_index: usize,
    /// Group key value.
    pub group_label: &'a Datum,
    /// Position of the stratum within its group.
    pub stratum_index: usize,
    /// Stratum category.
    pub stratum_label: &'a Datum,
    /// First hue sub-group of the stratum, when a hue column is configured.
    pub hue: Option<&'a Datum>,
}

/// Colour strategy for strata. Flows inherit the colour of their origin stratum.
pub trait Palette: Send + Sync {
    /// Opaque colour for the stratum described by `key`.
    fn color_for(&self, key: &StratumKey<'_>) -> Rgba8;
}

/// The ten-colour categorical cycle most plotting tools default to.
const DEFAULT_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Colours by stratum position, wrapping around each list.
///
/// With several lists, group `i` uses list `i % lists.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexPalette {
    lists: Vec<Vec<Rgba8>>,
}

impl IndexPalette {
    /// One list shared by every group.
    pub fn new(colors: Vec<Rgba8>) -> Self {
        Self {
            lists: vec![colors],
        }
    }

    /// One list per group.
    pub fn per_group(lists: Vec<Vec<Rgba8>>) -> Self {
        Self { lists }
    }

    /// Shared list parsed from hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> AlluvialResult<Self> {
        let colors = colors
            .iter()
            .map(|c| Rgba8::from_hex(c.as_ref()))
            .collect::<AlluvialResult<Vec<_>>>()?;
        Ok(Self::new(colors))
    }
}

impl Default for IndexPalette {
    fn default() -> Self {
        let colors = DEFAULT_CYCLE
            .iter()
            .filter_map(|c| Rgba8::from_hex(c).ok())
            .collect();
        Self::new(colors)
    }
}

impl Palette for IndexPalette {
    fn color_for(&self, key: &StratumKey<'_>) -> Rgba8 {
        if self.lists.is_empty() {
            return Rgba8::grey();
        }
        let list = &self.lists[key.group_index % self.lists.len()];
        if list.is_empty() {
            return Rgba8::grey();
        }
        list[key.stratum_index % list.len()]
    }
}

/// `n` hues evenly spaced around the HSL colour wheel at fixed saturation and
/// lightness, picked by stratum position. Plain HSL, not a perceptually uniform space.
#[derive(Clone, Debug, PartialEq)]
pub struct HuePalette {
    colors: Vec<Rgba8>,
}

impl HuePalette {
    const SATURATION: f64 = 0.65;
    const LIGHTNESS: f64 = 0.6;
    /// Starting hue in degrees.
    const OFFSET: f64 = 12.0;

    /// Palette of `n` hues; `n = 0` is treated as 1.
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        let colors = (0..n)
            .map(|i| {
                let h = Self::OFFSET + 360.0 * i as f64 / n as f64;
                hsl_to_rgba8(h, Self::SATURATION, Self::LIGHTNESS)
            })
            .collect();
        Self { colors }
    }

    /// The generated colours.
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }
}

impl Palette for HuePalette {
    fn color_for(&self, key: &StratumKey<'_>) -> Rgba8 {
        self.colors[key.stratum_index % self.colors.len()]
    }
}

/// Explicit colour per value: the stratum's hue when it has one, its label otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedPalette {
    colors: HashMap<Datum, Rgba8>,
    fallback: Rgba8,
}

impl KeyedPalette {
    /// Empty map; every lookup yields `fallback`.
    pub fn new(fallback: Rgba8) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    /// Map `key` to `color`.
    pub fn with(mut self, key: impl Into<Datum>, color: Rgba8) -> Self {
        self.insert(key, color);
        self
    }

    /// Map `key` to `color`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<Datum>, color: Rgba8) {
        self.colors.insert(key.into(), color);
    }
}

impl Default for KeyedPalette {
    fn default() -> Self {
        Self::new(Rgba8::grey())
    }
}

impl Palette for KeyedPalette {
    fn color_for(&self, key: &StratumKey<'_>) -> Rgba8 {
        let lookup = key.hue.unwrap_or(key.stratum_label);
        self.colors.get(lookup).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/strategy.rs"]
mod tests;
