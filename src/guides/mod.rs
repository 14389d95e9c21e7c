//! View-space guides derived from the chart transform: grid lines, tick marks,
//! tick labels and the chart background rectangle.
//!
//! Every spaced guide enumerates positions through
//! [`CoordinateMapping::for_each_spacing`], so a grid, its ticks and its labels
//! built from the same [`AxisSpacing`] line up exactly.

mod chart_rectangle;
mod grid_line_set;
mod label_cache;
mod tick_label_set;
mod tick_mark_set;

pub use chart_rectangle::ChartRectangle;
pub use grid_line_set::GridLineSet;
pub use label_cache::{LabelCacheStats, TickLabelFormat, TickLabelFormatterFn};
pub use tick_label_set::TickLabelSet;
pub use tick_mark_set::TickMarkSet;

use crate::core::spacing::validate_spacing;
use crate::core::{ClippingPolicy, CoordinateMapping, Orientation};
use crate::error::{ChartError, ChartResult};

/// Where along `axis` positions are enumerated: `n * spacing + origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpacing {
    axis: Orientation,
    spacing: f64,
    origin: f64,
    clipping: ClippingPolicy,
}

impl AxisSpacing {
    pub fn new(axis: Orientation, spacing: f64) -> ChartResult<Self> {
        validate_spacing(spacing)?;
        Ok(Self {
            axis,
            spacing,
            origin: 0.0,
            clipping: ClippingPolicy::default(),
        })
    }

    pub fn with_origin(mut self, origin: f64) -> ChartResult<Self> {
        self.set_origin(origin)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_clipping(mut self, clipping: ClippingPolicy) -> Self {
        self.clipping = clipping;
        self
    }

    #[must_use]
    pub fn axis(self) -> Orientation {
        self.axis
    }

    #[must_use]
    pub fn spacing(self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn origin(self) -> f64 {
        self.origin
    }

    #[must_use]
    pub fn clipping(self) -> ClippingPolicy {
        self.clipping
    }

    pub fn set_spacing(&mut self, spacing: f64) -> ChartResult<()> {
        validate_spacing(spacing)?;
        self.spacing = spacing;
        Ok(())
    }

    pub fn set_origin(&mut self, origin: f64) -> ChartResult<()> {
        if !origin.is_finite() {
            return Err(ChartError::InvalidData(
                "spacing origin must be finite".to_owned(),
            ));
        }
        self.origin = origin;
        Ok(())
    }

    pub fn set_clipping(&mut self, clipping: ClippingPolicy) {
        self.clipping = clipping;
    }

    pub fn for_each<F>(self, mapping: &CoordinateMapping, callback: F) -> ChartResult<()>
    where
        F: FnMut(f64, f64),
    {
        mapping.for_each_spacing(self.axis, self.spacing, self.origin, self.clipping, callback)
    }
}

/// Cross-axis placement of tick marks and labels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TickAnchor {
    /// At a model value on the opposite axis, e.g. `0` to sit on the other axis.
    Value(f64),
    /// At the opposite axis' model minimum.
    #[default]
    MinEdge,
    /// At the opposite axis' model maximum.
    MaxEdge,
}

impl TickAnchor {
    /// View coordinate on the axis opposite to `axis`.
    #[must_use]
    pub fn view_position(self, mapping: &CoordinateMapping, axis: Orientation) -> f64 {
        let cross = axis.opposite();
        let model = match self {
            Self::Value(value) => value,
            Self::MinEdge => mapping.model_range(cross).min(),
            Self::MaxEdge => mapping.model_range(cross).max(),
        };
        mapping.model_to_view(cross, model)
    }
}
