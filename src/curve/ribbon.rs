use crate::{
    curve::fit::{FitMode, fit_path},
    foundation::core::{BezPath, Point},
    foundation::error::AlluvialResult,
    geometry::cursor::FlowSlice,
};

/// Closed outline from a top edge and a bottom edge sampled left to right:
/// the top edge forward, then the bottom edge reversed.
pub fn ribbon_outline(top: &[Point], bottom: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(top.len() + bottom.len());
    out.extend_from_slice(top);
    out.extend(bottom.iter().rev().copied());
    out
}

/// Outline of the ribbon joining `origin` at `x1` to `destination` at `x2`.
pub fn flow_outline(
    origin: FlowSlice,
    destination: FlowSlice,
    x1: f64,
    x2: f64,
    resolution: usize,
    mode: FitMode,
) -> AlluvialResult<Vec<Point>> {
    let top = fit_path(origin.top, destination.top, x1, x2, resolution, mode)?;
    let bottom = fit_path(origin.bottom, destination.bottom, x1, x2, resolution, mode)?;
    Ok(ribbon_outline(&top, &bottom))
}

/// Closed polyline path through `outline`.
pub fn outline_to_bez_path(outline: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut points = outline.iter();
    if let Some(&first) = points.next() {
        path.move_to(first);
        for &p in points {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/curve/ribbon.rs"]
mod tests;
