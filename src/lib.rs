//! chart-transform: model/view coordinate mapping for 2-D charts.
//!
//! [`ChartTransform`] maps domain values ("model" coordinates) to pixels
//! ("view" coordinates) and back, per axis, with optional non-linear
//! [`AxisTransform`](core::AxisTransform)s and inverted ranges. It also
//! enumerates evenly spaced tick/grid positions and tells subscribers when its
//! geometry changes.
//!
//! [`guides`] and [`plot`] turn that mapping into view-space primitives for a
//! [`Renderer`](render::Renderer).

pub mod core;
pub mod error;
pub mod guides;
pub mod plot;
pub mod render;
pub mod telemetry;

pub use core::{
    AxisTransform, ChartTransform, ChartTransformConfig, ClippingPolicy, CoordinateMapping,
    Orientation, Range, Vector2,
};
pub use error::{ChartError, ChartResult};
