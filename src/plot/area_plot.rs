use crate::core::{CoordinateMapping, Vector2};
use crate::error::{ChartError, ChartResult};
use crate::plot::{PlotGeometry, contiguous_runs, project_points};
use crate::render::{Color, PolygonPrimitive, RenderFrame};

/// Filled region between the data curve and a horizontal model baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPlot {
    pub points: Vec<Option<Vector2>>,
    pub baseline: f64,
    pub fill_color: Color,
}

impl AreaPlot {
    #[must_use]
    pub fn new(points: Vec<Option<Vector2>>) -> Self {
        Self {
            points,
            baseline: 0.0,
            fill_color: Color::rgba(0.25, 0.41, 0.88, 0.5),
        }
    }

    pub fn polygons(&self, mapping: &CoordinateMapping) -> ChartResult<Vec<PolygonPrimitive>> {
        if !self.baseline.is_finite() {
            return Err(ChartError::InvalidData(
                "area baseline must be finite".to_owned(),
            ));
        }

        let baseline = mapping.model_to_view_y(self.baseline);
        Ok(contiguous_runs(&project_points(mapping, &self.points))
            .into_iter()
            .filter(|run| run.len() >= 2)
            .map(|mut points| {
                let first_x = points[0].x;
                let last_x = points[points.len() - 1].x;
                points.push(Vector2::new(last_x, baseline));
                points.push(Vector2::new(first_x, baseline));
                PolygonPrimitive {
                    points,
                    fill_color: self.fill_color,
                }
            })
            .collect())
    }
}

impl PlotGeometry for AreaPlot {
    fn append_geometry(
        &self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        frame.polygons.extend(self.polygons(mapping)?);
        Ok(())
    }
}
