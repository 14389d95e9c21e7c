use crate::core::{CoordinateMapping, Vector2};
use crate::error::ChartResult;
use crate::plot::{PlotGeometry, contiguous_runs, project_points};
use crate::render::{PolylinePrimitive, RenderFrame, StrokeStyle};

/// Polyline through the data; `None` or non-finite points break the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinePlot {
    pub points: Vec<Option<Vector2>>,
    pub stroke: StrokeStyle,
}

impl LinePlot {
    #[must_use]
    pub fn new(points: Vec<Option<Vector2>>) -> Self {
        Self {
            points,
            stroke: StrokeStyle::default(),
        }
    }

    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Self {
        Self::new(points.into_iter().map(Some).collect())
    }

    #[must_use]
    pub fn polylines(&self, mapping: &CoordinateMapping) -> Vec<PolylinePrimitive> {
        contiguous_runs(&project_points(mapping, &self.points))
            .into_iter()
            .filter(|run| run.len() >= 2)
            .map(|points| PolylinePrimitive {
                points,
                stroke: self.stroke,
            })
            .collect()
    }
}

impl PlotGeometry for LinePlot {
    fn append_geometry(
        &self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        self.stroke.validate()?;
        frame.polylines.extend(self.polylines(mapping));
        Ok(())
    }
}
