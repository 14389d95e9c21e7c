use crate::core::{CoordinateMapping, Vector2, ViewRect};
use crate::error::{ChartError, ChartResult};
use crate::plot::PlotGeometry;
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Vertical bars from model `y = 0` to each point, centred on the point's x.
///
/// The bar width is a model-space size converted with
/// [`CoordinateMapping::model_to_view_delta_x`], so it scales with zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlot {
    pub points: Vec<Vector2>,
    pub bar_width: f64,
    pub fill_color: Color,
}

impl BarPlot {
    #[must_use]
    pub fn new(points: Vec<Vector2>, bar_width: f64) -> Self {
        Self {
            points,
            bar_width,
            fill_color: Color::rgb(0.25, 0.41, 0.88),
        }
    }

    pub fn bars(&self, mapping: &CoordinateMapping) -> ChartResult<Vec<RectPrimitive>> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }

        let width_px = mapping.model_to_view_delta_x(self.bar_width).abs();
        let baseline = mapping.model_to_view_y(0.0);
        Ok(self
            .points
            .iter()
            .filter(|point| point.is_finite())
            .map(|point| {
                let top = mapping.model_to_view_position(*point);
                let bounds = ViewRect::from_corners(
                    Vector2::new(top.x - width_px / 2.0, top.y),
                    Vector2::new(top.x + width_px / 2.0, baseline),
                );
                RectPrimitive::new(
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    self.fill_color,
                )
            })
            .collect())
    }
}

impl PlotGeometry for BarPlot {
    fn append_geometry(
        &self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        frame.rects.extend(self.bars(mapping)?);
        Ok(())
    }
}
