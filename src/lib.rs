//! Alluvial is an aggregation and layout engine for alluvial (flow) diagrams.
//!
//! It turns a table of categorical event records into stacked stratum
//! rectangles and the ribbons that connect them, without rendering anything
//! itself. The output is plain geometry ([`Diagram`]) that any backend can
//! draw.
//!
//! # Pipeline overview
//!
//! 1. **Aggregate**: `Table + AggregateSpec -> Aggregation` (relative stratum
//!    sizes and one [`FlowMatrix`] per adjacent group pair)
//! 2. **Lay out**: [`layout_group`] assigns every [`Stratum`] its rectangle
//! 3. **Draw flows**: a fresh [`LodeCursor`] per stratum and round carves
//!    non-overlapping slices; [`fit_path`] joins the slices with smooth curves
//!
//! [`Diagram::build`] runs all three steps.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same table and config give bit-identical output.
//! - **No IO**: tables are built in memory; reading files is up to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aggregate;
mod curve;
mod foundation;
mod geometry;
mod palette;
mod plot;
mod table;

pub use aggregate::aggregator::{AggregateSpec, Aggregation, ColumnMap, KeyOrder, aggregate};
pub use aggregate::flows::{FlowMatrix, Lode};
pub use curve::fit::{FitMode, MAX_RESOLUTION, fit_path};
pub use curve::ribbon::{flow_outline, outline_to_bez_path, ribbon_outline};
pub use foundation::core::{BezPath, Point, Rect, Rgba8};
pub use foundation::error::{AlluvialError, AlluvialResult};
pub use foundation::math::{Polynomial, linspace, polyfit};
pub use geometry::cursor::{FlowSlice, LodeCursor, reset_strata};
pub use geometry::layout::{GroupLayout, column_positions, layout_group};
pub use geometry::normalizer::Normalizer;
pub use geometry::stratum::{LabelAnchor, Stratum};
pub use palette::hsl::hsl_to_rgba8;
pub use palette::strategy::{HuePalette, IndexPalette, KeyedPalette, Palette, StratumKey};
pub use plot::config::DiagramConfig;
pub use plot::diagram::{Diagram, GroupColumn, Ribbon, StratumRef};
pub use table::datum::Datum;
pub use table::frame::{Column, Table, TableView};
pub use table::group::{GroupOrder, group_by, pairwise};
