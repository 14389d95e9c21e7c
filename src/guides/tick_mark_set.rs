use crate::core::{CoordinateMapping, Orientation};
use crate::error::{ChartError, ChartResult};
use crate::guides::{AxisSpacing, TickAnchor};
use crate::render::{LinePrimitive, RenderFrame, StrokeStyle};

/// Short perpendicular marks centred on the anchor at each spacing position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarkSet {
    spacing: AxisSpacing,
    anchor: TickAnchor,
    extent_px: f64,
    stroke: StrokeStyle,
}

impl TickMarkSet {
    pub const DEFAULT_EXTENT_PX: f64 = 10.0;

    #[must_use]
    pub fn new(spacing: AxisSpacing) -> Self {
        Self {
            spacing,
            anchor: TickAnchor::default(),
            extent_px: Self::DEFAULT_EXTENT_PX,
            stroke: StrokeStyle::default(),
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: TickAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_extent(mut self, extent_px: f64) -> ChartResult<Self> {
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick extent must be finite and > 0".to_owned(),
            ));
        }
        self.extent_px = extent_px;
        Ok(self)
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn spacing(&self) -> AxisSpacing {
        self.spacing
    }

    pub fn spacing_mut(&mut self) -> &mut AxisSpacing {
        &mut self.spacing
    }

    pub fn marks(&self, mapping: &CoordinateMapping) -> ChartResult<Vec<LinePrimitive>> {
        let axis = self.spacing.axis();
        let cross = self.anchor.view_position(mapping, axis);
        let half = self.extent_px / 2.0;
        let stroke = self.stroke;
        let mut marks = Vec::new();
        self.spacing.for_each(mapping, |_, view| {
            marks.push(match axis {
                Orientation::Horizontal => {
                    LinePrimitive::new(view, cross - half, view, cross + half, stroke)
                }
                Orientation::Vertical => {
                    LinePrimitive::new(cross - half, view, cross + half, view, stroke)
                }
            });
        })?;
        Ok(marks)
    }

    pub fn append_to(&self, mapping: &CoordinateMapping, frame: &mut RenderFrame) -> ChartResult<()> {
        frame.lines.extend(self.marks(mapping)?);
        Ok(())
    }
}
