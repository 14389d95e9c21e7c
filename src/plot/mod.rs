//! Data plots projected through the chart transform into view-space primitives.

mod area_plot;
mod bar_plot;
mod line_plot;
mod scatter_plot;

pub use area_plot::AreaPlot;
pub use bar_plot::BarPlot;
pub use line_plot::LinePlot;
pub use scatter_plot::ScatterPlot;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ChartTransform, CoordinateMapping, TransformWatch, Vector2};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// A plot that can emit its geometry for the current mapping.
pub trait PlotGeometry {
    fn append_geometry(
        &self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()>;
}

/// Maps model points to view points; gaps and non-finite points stay `None`.
#[must_use]
pub fn project_points(mapping: &CoordinateMapping, points: &[Option<Vector2>]) -> Vec<Option<Vector2>> {
    let project = |point: &Option<Vector2>| {
        (*point)
            .filter(|point| point.is_finite())
            .map(|point| mapping.model_to_view_position(point))
    };

    #[cfg(feature = "parallel-projection")]
    {
        points.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points.iter().map(project).collect()
    }
}

/// Splits projected points into runs separated by gaps.
pub(crate) fn contiguous_runs(projected: &[Option<Vector2>]) -> Vec<Vec<Vector2>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for point in projected {
        match point {
            Some(point) => current.push(*point),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Keeps a plot's last frame and rebuilds it only after the transform changed
/// or the plot itself was edited.
///
/// Attaching subscribes a listener on the transform. Release it with
/// [`CachedPlot::detach`]; dropping a still-attached plot leaves the listener
/// behind (a warning is logged).
#[derive(Debug)]
pub struct CachedPlot<P> {
    plot: P,
    watch: TransformWatch,
    frame: Option<RenderFrame>,
    rebuilds: u64,
}

impl<P: PlotGeometry> CachedPlot<P> {
    pub fn attach(plot: P, transform: &mut ChartTransform) -> Self {
        Self {
            plot,
            watch: transform.watch(),
            frame: None,
            rebuilds: 0,
        }
    }

    #[must_use]
    pub fn plot(&self) -> &P {
        &self.plot
    }

    /// Mutable access; the cached frame is treated as stale afterwards.
    pub fn plot_mut(&mut self) -> &mut P {
        self.watch.mark_dirty();
        &mut self.plot
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.frame.is_none() || self.watch.is_dirty()
    }

    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn frame(&mut self, mapping: &CoordinateMapping) -> ChartResult<&RenderFrame> {
        if self.watch.take_dirty() || self.frame.is_none() {
            let mut frame = RenderFrame::new(mapping.view_width(), mapping.view_height());
            if let Err(err) = self.plot.append_geometry(mapping, &mut frame) {
                self.watch.mark_dirty();
                return Err(err);
            }
            self.frame = Some(frame);
            self.rebuilds += 1;
        }
        self.frame
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("plot frame was not built".to_owned()))
    }

    /// Unsubscribes from `transform` and hands the plot back.
    pub fn detach(mut self, transform: &mut ChartTransform) -> P {
        transform.unwatch(&mut self.watch);
        self.plot
    }
}
