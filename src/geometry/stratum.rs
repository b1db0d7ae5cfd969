use crate::{
    foundation::core::{Point, Rect, Rgba8},
    geometry::{cursor::LodeCursor, normalizer::Normalizer},
    table::datum::Datum,
};

/// One category within one group, drawn as a stacked rectangle.
///
/// A stratum is created by the aggregator with only its relative size filled
/// in; [`crate::layout_group`] later assigns the absolute geometry. `x` is the
/// horizontal centre, `y` the bottom edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stratum {
    /// Category label.
    pub label: Datum,
    /// Share of the group's rows in `[0, 1]`.
    pub relative_height: f64,
    /// Number of rows in this stratum.
    pub row_count: usize,
    /// Distinct hue sub-group values present in this stratum (first-seen order).
    pub hues: Vec<Datum>,
    /// Colour assigned by a palette, if any.
    pub color: Option<Rgba8>,
    /// Horizontal centre.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Rectangle width.
    pub width: f64,
    /// Absolute (normalised) height.
    pub height: f64,
}

/// Where and what to print as a stratum's label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelAnchor {
    /// Anchor point: horizontal centre, vertical middle.
    pub at: Point,
    /// Label text.
    pub text: String,
}

impl Stratum {
    /// A stratum with relative size only; geometry starts zeroed.
    pub fn new(label: Datum, relative_height: f64, row_count: usize) -> Self {
        Self {
            label,
            relative_height,
            row_count,
            hues: Vec::new(),
            color: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Attach the hue sub-groups present in this stratum.
    pub fn with_hues(mut self, hues: Vec<Datum>) -> Self {
        self.hues = hues;
        self
    }

    /// Absolute height is `relative_height * scale`, optionally passed through `norm`.
    pub fn set_height(&mut self, scale: f64, norm: Option<&Normalizer>) {
        let raw = self.relative_height * scale;
        self.height = match norm {
            Some(n) => n.scaled(raw, scale),
            None => raw,
        };
    }

    /// Set the rectangle width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the horizontal centre and bottom edge.
    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Set the fill colour.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = Some(color);
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Rectangle covered by this stratum.
    pub fn rect(&self) -> Rect {
        let half = self.width / 2.0;
        Rect::new(self.x - half, self.y, self.x + half, self.top())
    }

    /// Left edge minus `gap`; where incoming flows end.
    pub fn left_bound(&self, gap: f64) -> f64 {
        self.x - self.width / 2.0 - gap
    }

    /// Right edge plus `gap`; where outgoing flows start.
    pub fn right_bound(&self, gap: f64) -> f64 {
        self.x + self.width / 2.0 + gap
    }

    /// Label anchored at the rectangle's centre.
    pub fn label_anchor(&self) -> LabelAnchor {
        LabelAnchor {
            at: Point::new(self.x, self.y + self.height / 2.0),
            text: self.label.to_string(),
        }
    }

    /// A fresh flow cursor spanning the full height of this stratum.
    pub fn lode_cursor(&self) -> LodeCursor {
        LodeCursor::new(self.y, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/stratum.rs"]
mod tests;
