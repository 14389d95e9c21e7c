use crate::core::{CoordinateMapping, Orientation};
use crate::error::ChartResult;
use crate::guides::AxisSpacing;
use crate::render::{Color, LinePrimitive, RenderFrame, StrokeStyle};

/// Full-length lines at every spacing position.
///
/// Positions run along `spacing.axis()`; a horizontal spacing yields vertical
/// lines spanning the full view height and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLineSet {
    spacing: AxisSpacing,
    stroke: StrokeStyle,
}

impl GridLineSet {
    #[must_use]
    pub fn new(spacing: AxisSpacing) -> Self {
        Self {
            spacing,
            stroke: StrokeStyle::new(1.0, Color::LIGHT_GRAY),
        }
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

    pub fn lines(&self, mapping: &CoordinateMapping) -> ChartResult<Vec<LinePrimitive>> {
        let width = mapping.view_width();
        let height = mapping.view_height();
        let stroke = self.stroke;
        let mut lines = Vec::new();
        self.spacing.for_each(mapping, |_, view| {
            lines.push(match self.spacing.axis() {
                Orientation::Horizontal => LinePrimitive::new(view, 0.0, view, height, stroke),
                Orientation::Vertical => LinePrimitive::new(0.0, view, width, view, stroke),
            });
        })?;
        Ok(lines)
    }

    pub fn append_to(&self, mapping: &CoordinateMapping, frame: &mut RenderFrame) -> ChartResult<()> {
        frame.lines.extend(self.lines(mapping)?);
        Ok(())
    }
}
