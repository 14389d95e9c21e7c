use crate::core::{CoordinateMapping, Vector2};
use crate::error::{ChartError, ChartResult};
use crate::plot::PlotGeometry;
use crate::render::{CirclePrimitive, Color, RenderFrame};

/// One dot per finite data point; the radius is in view units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub points: Vec<Vector2>,
    pub radius_px: f64,
    pub fill_color: Color,
}

impl ScatterPlot {
    pub const DEFAULT_RADIUS_PX: f64 = 2.0;

    #[must_use]
    pub fn new(points: Vec<Vector2>) -> Self {
        Self {
            points,
            radius_px: Self::DEFAULT_RADIUS_PX,
            fill_color: Color::BLACK,
        }
    }

    pub fn dots(&self, mapping: &CoordinateMapping) -> ChartResult<Vec<CirclePrimitive>> {
        if !self.radius_px.is_finite() || self.radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scatter radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(self
            .points
            .iter()
            .filter(|point| point.is_finite())
            .map(|point| {
                let view = mapping.model_to_view_position(*point);
                CirclePrimitive::new(view.x, view.y, self.radius_px, self.fill_color)
            })
            .collect())
    }
}

impl PlotGeometry for ScatterPlot {
    fn append_geometry(
        &self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        frame.circles.extend(self.dots(mapping)?);
        Ok(())
    }
}
